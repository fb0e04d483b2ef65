//! End-to-end behavior of the listing page core: cards in, actions out.

use std::cmp::Ordering;

use proptest::prelude::*;
use shelfview::app::navigation::PageLocation;
use shelfview::app::RevealTarget;
use shelfview::catalog::collation;
use shelfview::domain::{CardFields, NodeId};
use shelfview::{handle_event, initialize, Action, AppState, Config, DeploymentMode, Event};

fn page(cards: &[CardFields]) -> AppState {
    initialize(&Config::default(), cards, PageLocation::new("https:", "/", ""))
}

fn three_books() -> Vec<CardFields> {
    vec![
        CardFields::new("가", "김영하", "문학동네"),
        CardFields::new("나", "홍길동", "민음사"),
        CardFields::new("다", "한강", "창비"),
    ]
}

fn dispatch(state: &mut AppState, event: Event) -> Vec<Action> {
    handle_event(state, &event).unwrap()
}

#[test]
fn test_title_sort_of_sorted_listing_keeps_order() {
    let mut state = page(&three_books());
    let actions = dispatch(&mut state, Event::SortChanged { criterion: "title".into() });
    assert_eq!(actions, vec![Action::Reorder(vec![NodeId(0), NodeId(1), NodeId(2)])]);
}

#[test]
fn test_search_by_author_shows_single_card() {
    let mut state = page(&three_books());
    let actions = dispatch(&mut state, Event::SearchInput { query: "홍길동".into() });

    assert_eq!(
        actions,
        vec![
            Action::HideCard { node: NodeId(0) },
            Action::ShowCard { node: NodeId(1), display: String::new() },
            Action::HideCard { node: NodeId(2) },
            Action::ShowNoResults(false),
        ]
    );
}

#[test]
fn test_search_without_match_shows_no_results() {
    let mut state = page(&three_books());
    let actions = dispatch(&mut state, Event::SearchInput { query: "zzz".into() });

    assert!(actions[..3].iter().all(|a| matches!(a, Action::HideCard { .. })));
    assert_eq!(actions[3], Action::ShowNoResults(true));
    assert!(state.no_results);
}

#[test]
fn test_clearing_search_restores_all_cards() {
    let mut state = page(&three_books());
    dispatch(&mut state, Event::SearchInput { query: "zzz".into() });
    let actions = dispatch(&mut state, Event::SearchInput { query: "   ".into() });

    assert_eq!(state.visible_count(), 3);
    assert_eq!(actions.last(), Some(&Action::ShowNoResults(false)));
}

fn sort_by_every_text_key(values: &[&str]) -> Vec<Vec<NodeId>> {
    let cards: Vec<CardFields> = values.iter().map(|v| CardFields::new(v, v, v)).collect();
    ["title", "author", "publisher"]
        .into_iter()
        .map(|criterion| {
            let mut state = page(&cards);
            dispatch(&mut state, Event::SortChanged { criterion: criterion.into() });
            state.order
        })
        .collect()
}

#[test]
fn test_text_sorts_follow_korean_locale_order() {
    let cases: [(&[&str], Vec<NodeId>); 3] = [
        (&["창비", "O'Reilly", "문학동네"], vec![NodeId(2), NodeId(0), NodeId(1)]),
        (&["힣", "漢", "한"], vec![NodeId(2), NodeId(1), NodeId(0)]),
        (&["O'Reilly", "漢", "각", "힣", "é", "f"], vec![NodeId(2), NodeId(1), NodeId(3), NodeId(4), NodeId(5), NodeId(0)]),
    ];

    for (values, expected) in cases {
        for order in sort_by_every_text_key(values) {
            assert_eq!(order, expected, "sorting {values:?}");
        }
    }
}

#[test]
fn test_sort_after_search_keeps_hidden_cards_hidden() {
    let mut state = page(&three_books());
    dispatch(&mut state, Event::SearchInput { query: "한강".into() });
    dispatch(&mut state, Event::SortChanged { criterion: "author".into() });

    assert_eq!(state.visible_nodes(), vec![NodeId(2)]);
    assert_eq!(state.order.len(), 3);
}

#[test]
fn test_date_change_with_query_navigates() {
    let cards = three_books();
    let mut state = initialize(
        &Config::default(),
        &cards,
        PageLocation::new("https:", "/", "?date=2024-01-08"),
    );
    assert_eq!(state.mode, DeploymentMode::Dynamic);

    let actions = dispatch(&mut state, Event::DateChanged { date: "2024-01-01".into() });
    assert_eq!(actions, vec![Action::Navigate { url: "/?date=2024-01-01".into() }]);
}

#[test]
fn test_date_change_on_static_page_shows_notice() {
    let mut state = page(&three_books());
    let actions = dispatch(&mut state, Event::DateChanged { date: "2024-01-01".into() });

    assert_eq!(actions.len(), 2);
    match &actions[0] {
        Action::ShowNotice { message } => assert!(message.starts_with("2024년 1월 1일")),
        other => panic!("expected notice, got {other:?}"),
    }
    assert_eq!(actions[1], Action::SetLastUpdated { text: "2024-01-01 데이터".into() });
}

#[test]
fn test_configured_mode_overrides_location() {
    let config = Config { mode: Some(DeploymentMode::Dynamic), ..Config::default() };
    let cards = three_books();
    let mut state = initialize(&config, &cards, PageLocation::new("file:", "/index.html", ""));

    let actions = dispatch(&mut state, Event::DateChanged { date: "2024-03-04".into() });
    assert_eq!(actions, vec![Action::Navigate { url: "/index.html?date=2024-03-04".into() }]);
}

#[test]
fn test_empty_date_does_nothing() {
    let mut state = page(&three_books());
    assert!(dispatch(&mut state, Event::DateChanged { date: String::new() }).is_empty());
}

#[test]
fn test_page_load_reveals_featured_then_listing() {
    let mut state = page(&three_books());
    dispatch(&mut state, Event::SortChanged { criterion: "pubDate".into() });
    let actions = dispatch(&mut state, Event::PageLoaded { featured_cards: 1 });

    assert_eq!(
        actions,
        vec![
            Action::Reveal { target: RevealTarget::Featured(0), delay_ms: 0 },
            Action::Reveal { target: RevealTarget::Book(NodeId(0)), delay_ms: 0 },
            Action::Reveal { target: RevealTarget::Book(NodeId(1)), delay_ms: 50 },
            Action::Reveal { target: RevealTarget::Book(NodeId(2)), delay_ms: 100 },
        ]
    );
}

#[test]
fn test_scroll_toggles_header() {
    let mut state = page(&[]);
    assert_eq!(
        dispatch(&mut state, Event::Scrolled { offset_y: 51.0 }),
        vec![Action::SetHeaderScrolled(true)]
    );
    assert_eq!(
        dispatch(&mut state, Event::Scrolled { offset_y: 10.0 }),
        vec![Action::SetHeaderScrolled(false)]
    );
}

#[test]
fn test_empty_page_search_reports_no_results() {
    let mut state = page(&[]);
    let actions = dispatch(&mut state, Event::SearchInput { query: "아무거나".into() });
    assert_eq!(actions, vec![Action::ShowNoResults(true)]);
}

fn card_strategy() -> impl Strategy<Value = CardFields> {
    (
        "[가-힣a-zA-Z ]{0,6}",
        "[가-힣a-zA-Z]{0,4}",
        "[가-힣a-z]{0,4}",
        prop::option::of("[가-힣a-zA-Z]{0,4}"),
        prop::option::of("20[0-9]{2}-[01][0-9]-[0-3][0-9]"),
    )
        .prop_map(|(title, author, publisher, category, date)| {
            let mut card = CardFields::new(&title, &author, &publisher);
            card.category = category;
            if let Some(d) = date {
                card = card.with_pub_date(&d);
            }
            card
        })
}

fn field(text: Option<&String>) -> String {
    text.map(|s| s.trim().to_lowercase()).unwrap_or_default()
}

proptest! {
    #[test]
    fn prop_card_visible_iff_query_in_a_field(
        cards in prop::collection::vec(card_strategy(), 0..12),
        query in "[가-힣a-zA-Z ]{0,3}",
    ) {
        let mut state = page(&cards);
        handle_event(&mut state, &Event::SearchInput { query: query.clone() }).unwrap();

        let term = query.trim().to_lowercase();
        for (card, visible) in cards.iter().zip(&state.visible) {
            let expected = [card.title.as_ref(), card.author.as_ref(), card.publisher.as_ref()]
                .into_iter()
                .any(|f| field(f).contains(&term))
                || card.category.as_ref().is_some_and(|c| field(Some(c)).contains(&term));
            prop_assert_eq!(*visible, expected);
        }
        prop_assert_eq!(state.no_results, state.visible_count() == 0);
    }

    #[test]
    fn prop_search_is_idempotent(
        cards in prop::collection::vec(card_strategy(), 0..12),
        query in "[가-힣a-z]{0,2}",
    ) {
        let mut state = page(&cards);
        let first = handle_event(&mut state, &Event::SearchInput { query: query.clone() }).unwrap();
        let second = handle_event(&mut state, &Event::SearchInput { query }).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_title_sort_is_non_decreasing_permutation(
        cards in prop::collection::vec(card_strategy(), 0..16),
    ) {
        let mut state = page(&cards);
        handle_event(&mut state, &Event::SortChanged { criterion: "title".into() }).unwrap();

        let mut seen: Vec<usize> = state.order.iter().map(|n| n.index()).collect();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..cards.len()).collect::<Vec<_>>());

        for pair in state.order.windows(2) {
            let a = field(cards[pair[0].index()].title.as_ref());
            let b = field(cards[pair[1].index()].title.as_ref());
            prop_assert_ne!(collation::compare(&a, &b), Ordering::Greater);
        }
    }

    #[test]
    fn prop_pub_date_sort_is_non_increasing(
        cards in prop::collection::vec(card_strategy(), 0..16),
    ) {
        let mut state = page(&cards);
        handle_event(&mut state, &Event::SortChanged { criterion: "pub_date".into() }).unwrap();

        let key = |n: &NodeId| cards[n.index()].pub_date_attr.clone().unwrap_or_default();
        for pair in state.order.windows(2) {
            prop_assert!(key(&pair[0]) >= key(&pair[1]));
        }
    }
}
