//! Terminal front end: rendering and line input.

use std::io::Cursor;

use bjsim::terminal::{Terminal, render_table};
use bjsim::{Card, Game, GameOptions, Interaction, Rank, Scripted, Suit};

const fn card(rank: Rank) -> Card {
    Card::new(rank, Suit::Clubs)
}

fn terminal(input: &str) -> Terminal<Cursor<Vec<u8>>, Vec<u8>> {
    Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new()).with_clear_screen(false)
}

fn output(ui: Terminal<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(ui.into_output()).unwrap()
}

#[test]
fn fresh_table_renders_empty_seats() {
    let game = Game::new(GameOptions::default().with_seats(2).with_decks(1), 1).unwrap();
    let text = render_table(&game.view(), "Waiting");

    assert!(text.contains("BLACKJACK - Waiting | Bankroll: 0 | Shoe Remaining: 52"));
    assert!(text.contains("Dealer:  (no cards)"));
    assert!(text.contains("Seat 1:\n  (empty)"));
    assert!(text.contains("Seat 2:\n  (empty)"));
}

#[test]
fn rendering_is_idempotent() {
    let mut game = Game::new(GameOptions::default(), 4).unwrap();
    game.shoe.stack(&[
        card(Rank::Ten),
        card(Rank::Seven),
        card(Rank::Nine),
        card(Rank::Queen),
    ]);
    game.play_round(&mut Scripted::new(["5", "s"])).unwrap();

    let remaining = game.cards_remaining();
    let first = render_table(&game.view(), "Settled");
    let second = render_table(&game.view(), "Settled");

    assert_eq!(first, second);
    assert_eq!(game.cards_remaining(), remaining);
    assert_eq!(game.bankroll(), 5);
}

#[test]
fn settled_table_shows_dealer_and_hand_details() {
    let mut game = Game::new(GameOptions::default(), 4).unwrap();
    game.shoe.stack(&[
        card(Rank::Ace),
        card(Rank::Seven),
        card(Rank::Six),
        card(Rank::Queen),
    ]);
    game.play_round(&mut Scripted::new(["3", "s"])).unwrap();

    let text = render_table(&game.view(), "Done");
    assert!(text.contains("Dealer:  [7 ♣] [Q ♣]  => 17"));
    assert!(text.contains("  Hand 1 (bet=3, splits=0): A ♣ 6 ♣  => 17 (soft)  [STAND]"));
}

#[test]
fn round_at_the_terminal() {
    let mut game = Game::new(GameOptions::default(), 4).unwrap();
    game.shoe.stack(&[
        card(Rank::Ten),
        card(Rank::Six),
        card(Rank::Eight),
        card(Rank::Ten),
        card(Rank::King),
    ]);
    let mut ui = terminal("10\r\ns\n");

    let result = game.play_round(&mut ui).unwrap();
    assert_eq!(result.net, 20);

    let text = output(ui);
    assert!(text.contains("BLACKJACK - Initial deal | Bankroll: 0"));
    assert!(text.contains("Dealer:  [6 ♣] [??]  => 6\n"));
    assert!(text.contains("Seat 1 bet [1]: "));
    assert!(text.contains("> Hand 1 (bet=10, splits=0): 10 ♣ 8 ♣  => 18"));
    assert!(text.contains("Seat 1 Hand 1 total=18 - choose [h]it/[s]tand/[d]ouble: "));
    assert!(text.contains("[Dealer hits]\nDealer: [6 ♣] 10 ♣ K ♣  => 26"));
    assert!(text.contains("[Dealer busts]"));
    assert!(text.ends_with("Round result: +20 (Bankroll: 20)\n"));
    assert!(!text.contains("\x1b["));
}

#[test]
fn non_utf8_answers_do_not_end_the_round() {
    let mut game = Game::new(GameOptions::default(), 4).unwrap();
    game.shoe.stack(&[
        card(Rank::Ten),
        card(Rank::Seven),
        card(Rank::Nine),
        card(Rank::Queen),
    ]);
    let mut ui = Terminal::new(Cursor::new(b"\xff\xfe\ns\n".to_vec()), Vec::new())
        .with_clear_screen(false);

    let result = game.play_round(&mut ui).unwrap();

    assert_eq!(result.hands[0].bet, 1);
    assert_eq!(result.net, 1);
    assert_eq!(game.bankroll(), 1);
}

#[test]
fn invalid_utf8_line_is_read_lossily() {
    let mut ui = Terminal::new(Cursor::new(b"h\xffit\r\n".to_vec()), Vec::new());

    assert_eq!(ui.prompt("> ").as_deref(), Some("h\u{fffd}it"));
    assert_eq!(ui.prompt("> "), None);
}

#[test]
fn dealer_standing_is_announced() {
    let mut ui = terminal("");
    ui.dealer_final(&[card(Rank::Ten), card(Rank::Seven)]);
    assert_eq!(output(ui), "\n[Dealer stands]\nDealer: [10 ♣] 7 ♣  => 17\n");
}

#[test]
fn prompt_strips_line_endings() {
    let mut ui = terminal("hit\r\n  stand  \nlast");

    assert_eq!(ui.prompt("> ").as_deref(), Some("hit"));
    assert_eq!(ui.prompt("> ").as_deref(), Some("  stand  "));
    assert_eq!(ui.prompt("> ").as_deref(), Some("last"));
    assert_eq!(ui.prompt("> "), None);
    assert_eq!(output(ui), "> > > > ");
}

#[test]
fn closed_input_ends_the_session() {
    let mut game = Game::new(GameOptions::default(), 4).unwrap();
    let mut ui = terminal("");

    game.run(&mut ui);

    assert_eq!(game.rounds_played(), 0);
    let text = output(ui);
    assert!(text.contains("Press ENTER to deal a new round, or 'q' to quit: "));
    assert!(text.ends_with("Goodbye.\n"));
}

#[test]
fn redraw_clears_screen_by_default() {
    let game = Game::new(GameOptions::default(), 4).unwrap();
    let mut ui = Terminal::new(Cursor::new(Vec::new()), Vec::new());

    ui.redraw(&game.view(), "Start");

    let text = String::from_utf8(ui.into_output()).unwrap();
    assert!(text.starts_with("\x1b[H\x1b[2J"));
}
