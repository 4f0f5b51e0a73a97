use tui_blockfall::core::{Field, GameStatus};
use tui_blockfall::term::{named_to_rgb, AnchorY, GameView, Hud, ViewState, Viewport};
use tui_blockfall::types::{FigureKind, NamedColor};

fn view_state(field: &Field) -> ViewState {
    ViewState {
        snapshot: field.snapshot(),
        next: field.next_figure().cloned(),
        dirty: true,
    }
}

#[test]
fn term_view_renders_border_corners() {
    let field = Field::with_seed(1);
    let view = GameView::default();

    // 10 cells * 2 columns + border = 22 wide, 20 rows + border = 22 high.
    let fb = view.render(&view_state(&field), Hud::default(), Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_grid_content_two_columns_wide() {
    let field = Field::with_seed(1);
    let mut state = view_state(&field);
    state.snapshot.figure = None;
    let bottom_left = 19 * 10;
    state.snapshot.cells[bottom_left] = FigureKind::Z.content();

    let fb = GameView::default().render(&state, Hud::default(), Viewport::new(22, 22));

    let (x0, y0) = (1, 20);
    let left = fb.get(x0, y0).unwrap();
    assert_eq!(left.ch, '█');
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, '█');
    assert_eq!(left.style.fg, named_to_rgb(NamedColor::Cyan));
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_follows_field_size() {
    let mut field = Field::with_seed(1);
    field.start_descent();
    let mut state = view_state(&field);
    state.snapshot.width = 4;
    state.snapshot.height = 3;
    state.snapshot.cells = vec![0; 12];
    state.snapshot.figure = None;

    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&state, Hud::default(), Viewport::new(10, 5));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(9, 4).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut field = Field::with_seed(1);
    field.start_descent();
    let hud = Hud {
        score: 1200,
        rows: 12,
        interval_ms: 210,
    };

    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&view_state(&field), hud, Viewport::new(60, 24));
    let text = fb.to_text();

    assert!(text.contains("SCORE"));
    assert!(text.contains("1200"));
    assert!(text.contains("ROWS"));
    assert!(text.contains("NEXT"));
    assert!(!text.contains("PAUSED"));
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let field = Field::with_seed(1);
    let fb = GameView::default().render(&view_state(&field), Hud::default(), Viewport::new(22, 22));
    assert!(!fb.to_text().contains("SCORE"));
}

#[test]
fn term_view_overlays_status() {
    let field = Field::with_seed(1);
    let mut state = view_state(&field);
    assert_eq!(state.snapshot.status, GameStatus::Paused);

    let view = GameView::default();
    let paused = view.render(&state, Hud::default(), Viewport::new(22, 22));
    assert!(paused.to_text().contains("PAUSED"));

    state.snapshot.status = GameStatus::GameOver;
    let over = view.render(&state, Hud::default(), Viewport::new(22, 22));
    assert!(over.to_text().contains("GAME OVER"));
}

#[test]
fn term_view_draws_figure_cells_inside_the_field() {
    let mut field = Field::with_seed(1);
    field.start_descent();
    for _ in 0..5 {
        field.apply_action(tui_blockfall::types::Action::Down);
    }
    let state = view_state(&field);
    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&state, Hud::default(), Viewport::new(22, 22));

    for cell in field.current_figure().occupied_cells() {
        let px = 1 + cell.x() as u16 * 2;
        let py = 1 + cell.y() as u16;
        let glyph = fb.get(px, py).unwrap();
        assert_eq!(glyph.ch, '█');
        assert!(glyph.style.bold);
    }
}
