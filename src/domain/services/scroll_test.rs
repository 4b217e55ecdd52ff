use super::Scroll;

fn scroll(list_length: u16, viewport_length: u16) -> Scroll {
    let mut scroll = Scroll::default();
    scroll.set_state(list_length, viewport_length);
    return scroll;
}

#[test]
fn it_stops_at_the_bottom() {
    let mut scroll = scroll(12, 10);
    for _ in 0..5 {
        scroll.down();
    }

    assert_eq!(scroll.position, 2);
}

#[test]
fn it_does_not_scroll_short_content() {
    let mut scroll = scroll(4, 10);
    scroll.down_page();

    assert_eq!(scroll.position, 0);
}

#[test]
fn it_pages_and_returns_to_top() {
    let mut scroll = scroll(100, 10);
    scroll.down_page();
    scroll.down_page();
    assert_eq!(scroll.position, 20);

    scroll.up_page();
    assert_eq!(scroll.position, 10);

    scroll.top();
    assert_eq!(scroll.position, 0);
}

#[test]
fn it_clamps_when_content_shrinks() {
    let mut scroll = scroll(100, 10);
    scroll.down_page();
    scroll.set_state(12, 10);

    assert_eq!(scroll.position, 2);
}
