use tui_memory::core::{ClockScheduler, Deck, GameConfig, GameState};
use tui_memory::term::{AnchorY, BoardModel, CardFace, FrameBuffer, GameView, Rgb, Viewport};
use tui_memory::types::{Symbol, MSG_IDLE, MSG_IN_PROGRESS};

type Game = GameState<ClockScheduler, BoardModel>;

fn standard_game(seed: u64) -> Game {
    let config = GameConfig::default().with_seed(seed);
    let board = BoardModel::new(config.card_count(), config.time_limit_secs);
    GameState::new(config, ClockScheduler::new(), board).unwrap()
}

fn two_pair_game() -> Game {
    let config = GameConfig::default().with_alphabet(&[Symbol::Ghost, Symbol::Skull]);
    let board = BoardModel::new(config.card_count(), config.time_limit_secs);
    let mut game = GameState::new(config, ClockScheduler::new(), board).unwrap();
    game.new_game_with_deck(Deck::from_cards(vec![Symbol::Ghost, Symbol::Skull, Symbol::Ghost, Symbol::Skull]).unwrap());
    game
}

/// Top-anchored render, so the frame starts at row 0.
fn render(board: &BoardModel, cursor: Option<usize>, vp: Viewport) -> FrameBuffer {
    GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(board, cursor, vp)
}

/// Center cell of the card at `position` in a frame anchored at x = 0.
fn card_center(position: usize) -> (u16, u16) {
    let col = (position % 4) as u16;
    let row = (position / 4) as u16;
    (2 + col * 6 + 2, 1 + row * 3 + 1)
}

fn screen_text(fb: &FrameBuffer) -> String {
    fb.rows().join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let game = standard_game(1);
    let fb = render(game.observer(), None, Viewport::new(27, 16));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(26, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 13).unwrap().ch, '└');
    assert_eq!(fb.get(26, 13).unwrap().ch, '┘');
}

#[test]
fn term_view_idle_board_is_all_hidden() {
    let game = standard_game(1);
    let fb = render(game.observer(), None, Viewport::new(27, 16));

    for position in 0..16 {
        let (x, y) = card_center(position);
        assert_eq!(fb.get(x, y).unwrap().ch, '?', "position {position}");
    }
    assert!(fb.rows()[14].starts_with(MSG_IDLE));
}

#[test]
fn term_view_shows_revealed_symbol_letter() {
    let mut game = standard_game(42);
    game.new_game();
    game.flip_card(5).unwrap();

    let symbol = game.symbol_at(5).unwrap();
    assert_eq!(game.observer().face(5), Some(CardFace::Up(symbol)));

    let fb = render(game.observer(), None, Viewport::new(27, 16));
    let (x, y) = card_center(5);
    assert_eq!(fb.get(x, y).unwrap().ch, symbol.letter());
    assert!(fb.rows()[14].starts_with(MSG_IN_PROGRESS));
}

#[test]
fn term_view_matched_cards_get_locked_background() {
    let mut game = two_pair_game();
    game.flip_card(0).unwrap();
    game.flip_card(2).unwrap();

    let fb = render(game.observer(), None, Viewport::new(27, 8));
    let (x, y) = card_center(2);
    let cell = fb.get(x, y).unwrap();
    assert_eq!(cell.ch, 'G');
    assert!(cell.style.bold);
    assert_ne!(cell.style.bg, Rgb::new(0, 0, 0));
}

#[test]
fn term_view_mismatch_flips_back_on_screen() {
    let mut game = two_pair_game();
    game.flip_card(0).unwrap();
    game.flip_card(1).unwrap();

    let fb = render(game.observer(), None, Viewport::new(27, 8));
    assert_eq!(fb.get(card_center(1).0, card_center(1).1).unwrap().ch, 'S');

    game.advance(1_000);
    let fb = render(game.observer(), None, Viewport::new(27, 8));
    assert_eq!(fb.get(card_center(1).0, card_center(1).1).unwrap().ch, '?');
}

#[test]
fn term_view_highlights_cursor_card() {
    let game = standard_game(1);
    let fb = render(game.observer(), Some(6), Viewport::new(27, 16));

    // Top-left corner of card 6 (column 2, row 1).
    let corner = fb.get(2 + 2 * 6, 1 + 3).unwrap();
    assert_eq!(corner.ch, '┌');
    assert_eq!(corner.style.fg, Rgb::new(255, 210, 60));

    let other = fb.get(2, 1).unwrap();
    assert_ne!(other.style.fg, Rgb::new(255, 210, 60));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut game = two_pair_game();
    game.flip_card(0).unwrap();
    game.flip_card(2).unwrap();
    game.advance(3_000);

    let fb = GameView::default().render(game.observer(), None, Viewport::new(60, 16));
    let text = screen_text(&fb);
    assert!(text.contains("TIME"));
    assert!(text.contains("57s"));
    assert!(text.contains("PAIRS"));
    assert!(text.contains("1/2"));
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let game = standard_game(1);
    let fb = render(game.observer(), None, Viewport::new(27, 16));
    assert!(!screen_text(&fb).contains("TIME"));
}

#[test]
fn term_view_titles_outcome() {
    let mut game = two_pair_game();
    assert!(screen_text(&render(game.observer(), None, Viewport::new(27, 8))).contains(" MEMORY "));

    for p in [0, 2, 1, 3] {
        game.flip_card(p).unwrap();
    }
    let fb = render(game.observer(), None, Viewport::new(27, 8));
    assert!(fb.rows()[0].contains(" YOU WON "));

    game.new_game();
    game.advance(60_000);
    let fb = render(game.observer(), None, Viewport::new(27, 8));
    assert!(fb.rows()[0].contains(" TIME UP "));
}

#[test]
fn term_view_tiny_viewport_does_not_panic() {
    let game = standard_game(1);
    let fb = render(game.observer(), Some(15), Viewport::new(5, 3));
    assert_eq!((fb.width(), fb.height()), (5, 3));
}
