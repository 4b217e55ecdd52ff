use strum::EnumIter;
use strum::IntoEnumIterator;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter)]
pub enum FormField {
    #[default]
    Goal,
    Users,
    Constraints,
    Template,
    Risks,
    Result,
}

impl FormField {
    pub fn title(&self) -> &'static str {
        match self {
            FormField::Goal => return "Feature Goal *",
            FormField::Users => return "Target Users *",
            FormField::Constraints => return "Constraints",
            FormField::Template => return "Product Type",
            FormField::Risks => return "Risks / Unknowns",
            FormField::Result => return "Generated Tasks",
        }
    }

    /// Goal and users behave like single line inputs, where enter submits the
    /// form instead of inserting a newline.
    pub fn is_single_line(&self) -> bool {
        return matches!(self, FormField::Goal | FormField::Users);
    }

    pub fn is_text(&self) -> bool {
        return !matches!(self, FormField::Template | FormField::Result);
    }

    pub fn next(&self, include_result: bool) -> FormField {
        let fields = FormField::cycle(include_result);
        let idx = fields.iter().position(|e| return e == self).unwrap_or(0);
        return fields[(idx + 1) % fields.len()];
    }

    pub fn prev(&self, include_result: bool) -> FormField {
        let fields = FormField::cycle(include_result);
        let idx = fields.iter().position(|e| return e == self).unwrap_or(0);
        return fields[(idx + fields.len() - 1) % fields.len()];
    }

    fn cycle(include_result: bool) -> Vec<FormField> {
        return FormField::iter()
            .filter(|e| return include_result || *e != FormField::Result)
            .collect();
    }
}

/// Display state of the result region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResultMode {
    #[default]
    Empty,
    Previewing,
    Editing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Form,
    Status,
}

impl Page {
    pub fn other(&self) -> Page {
        match self {
            Page::Form => return Page::Status,
            Page::Status => return Page::Form,
        }
    }
}
