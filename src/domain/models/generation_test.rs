use super::GenerationRequest;
use super::GenerationResponse;
use super::Template;

#[test]
fn it_defaults_to_web_template() {
    let req = GenerationRequest::default();
    assert_eq!(req.template, "web");
    assert_eq!(req.template_label(), "Web Application");
}

#[test]
fn it_cycles_templates() {
    assert_eq!(Template::Web.next(), Template::Mobile);
    assert_eq!(Template::Internal.next(), Template::Web);
    assert_eq!(Template::Web.prev(), Template::Internal);
}

#[test]
fn it_keeps_unknown_template_labels() {
    let req = GenerationRequest {
        template: "desktop".to_string(),
        ..GenerationRequest::default()
    };

    assert_eq!(Template::parse(&req.template), None);
    assert_eq!(req.template_label(), "desktop");
}

#[test]
fn it_serializes_with_fixed_keys() {
    let req = GenerationRequest {
        goal: "Add login".to_string(),
        users: "Devs".to_string(),
        ..GenerationRequest::default()
    };

    insta::assert_snapshot!(serde_json::to_string(&req).unwrap(), @r###"{"goal":"Add login","users":"Devs","constraints":"","template":"web","risks":""}"###);
}

#[test]
fn it_keeps_extra_response_fields() {
    let res: GenerationResponse =
        serde_json::from_str(r###"{"result": "## Tasks", "model": "flash"}"###).unwrap();

    assert_eq!(res.result, "## Tasks");
    assert_eq!(res.extra.get("model").unwrap(), "flash");
}
