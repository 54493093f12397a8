use killer_darts::core::Session;
use killer_darts::term::{Overlay, ScoreboardView, ViewState, Viewport};

fn row_of(fb: &killer_darts::term::FrameBuffer, needle: &str) -> Option<u16> {
    (0..fb.height()).find(|&y| fb.row_text(y).contains(needle))
}

fn three_players() -> Session {
    let mut s = Session::new();
    s.add_player("Iceman", 7).unwrap();
    s.add_player("Gurra G", 20).unwrap();
    s.add_player("Fredelicious", 13).unwrap();
    s
}

#[test]
fn scoreboard_lists_players_by_number_descending() {
    let snap = three_players().snapshot();
    let fb = ScoreboardView::default().render(&snap, &ViewState::default(), Viewport::new(100, 30));

    let gurra = row_of(&fb, "Gurra G").unwrap();
    let fred = row_of(&fb, "Fredelicious").unwrap();
    let ice = row_of(&fb, "Iceman").unwrap();
    assert!(gurra < fred && fred < ice);
}

#[test]
fn scoreboard_shows_pips_and_status() {
    let mut s = three_players();
    s.apply_hit(0);
    s.apply_hit(0);
    let fb = ScoreboardView::default().render(&s.snapshot(), &ViewState::default(), Viewport::new(100, 30));

    let row = fb.row_text(row_of(&fb, "Iceman").unwrap());
    assert!(row.contains("●●○○○"), "row: {row}");
    assert!(row.contains("Player"), "row: {row}");
}

#[test]
fn scoreboard_shows_winner_banner_and_out_players() {
    let mut s = three_players();
    for _ in 0..5 {
        s.apply_hit(1);
    }
    let fb = ScoreboardView::default().render(&s.snapshot(), &ViewState::default(), Viewport::new(100, 30));

    assert!(row_of(&fb, "WINNER: Gurra G").is_some());
    assert!(row_of(&fb, "g: start new game").is_some());
    assert!(fb.row_text(row_of(&fb, "Iceman").unwrap()).contains("Out"));
    let gurra = (0..fb.height())
        .map(|y| fb.row_text(y))
        .find(|row| row.contains("Gurra G") && row.contains('●'))
        .unwrap();
    assert!(gurra.contains("●●●●●"));
    assert!(gurra.contains("Killer"));
}

#[test]
fn scoreboard_marks_selected_row() {
    let snap = three_players().snapshot();
    let ui = ViewState {
        selected: Some(2),
        ..ViewState::default()
    };
    let fb = ScoreboardView::default().render(&snap, &ui, Viewport::new(100, 30));

    let row = fb.row_text(row_of(&fb, "Fredelicious").unwrap());
    assert!(row.contains('▶'));
    assert!(!fb.row_text(row_of(&fb, "Iceman").unwrap()).contains('▶'));
}

#[test]
fn scoreboard_empty_roster_hint() {
    let snap = Session::new().snapshot();
    let fb = ScoreboardView::default().render(&snap, &ViewState::default(), Viewport::new(100, 30));
    assert!(row_of(&fb, "No players yet").is_some());
    assert!(row_of(&fb, "KILLER DARTS").is_some());
    assert!(row_of(&fb, "ROUND 1").is_some());
}

#[test]
fn scoreboard_side_panel_needs_width() {
    let snap = three_players().snapshot();
    let wide = ScoreboardView::default().render(&snap, &ViewState::default(), Viewport::new(100, 30));
    assert!(row_of(&wide, "ALIVE").is_some());

    let narrow = ScoreboardView::default().render(&snap, &ViewState::default(), Viewport::new(44, 30));
    assert!(row_of(&narrow, "ALIVE").is_none());
    assert!(row_of(&narrow, "Iceman").is_some());
}

#[test]
fn scoreboard_draws_status_line_and_overlay() {
    let snap = three_players().snapshot();
    let ui = ViewState {
        selected: None,
        status: Some("Iceman: 1/5"),
        overlay: Some(Overlay {
            title: "Add player",
            label: "Name",
            input: "Eagle",
            hint: "Esc: cancel",
        }),
    };
    let fb = ScoreboardView::default().render(&snap, &ui, Viewport::new(100, 30));

    assert!(fb.row_text(29).contains("Iceman: 1/5"));
    assert!(row_of(&fb, "Add player").is_some());
    assert!(row_of(&fb, "Name: Eagle_").is_some());
    assert!(row_of(&fb, "Esc: cancel").is_some());
}
