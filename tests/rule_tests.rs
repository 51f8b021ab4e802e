//! Rule extraction and rebinding tests over the public API.

use rulegrid::{
    BehaviorBinder, Board, NounKind, Position, Rule, RuleExtractor, TraitKind,
};

// =============================================================================
// Extraction symmetry
// =============================================================================

/// A vertical arrangement and its horizontal rotation derive the same rule.
#[test]
fn test_rule_symmetry_across_axes() {
    let mut horizontal = Board::new(5, 5);
    horizontal.place(Position::new(1, 2), NounKind::SubjectWater);
    horizontal.place(Position::new(2, 2), NounKind::ConnectorIs);
    horizontal.place(Position::new(3, 2), NounKind::TraitSink);

    let mut vertical = Board::new(5, 5);
    vertical.place(Position::new(2, 1), NounKind::SubjectWater);
    vertical.place(Position::new(2, 2), NounKind::ConnectorIs);
    vertical.place(Position::new(2, 3), NounKind::TraitSink);

    let expected = Rule::new(NounKind::SubjectWater, TraitKind::Sink);
    assert_eq!(RuleExtractor::extract(&horizontal).len(), 1);
    assert_eq!(
        RuleExtractor::extract(&horizontal),
        RuleExtractor::extract(&vertical)
    );
    assert!(RuleExtractor::extract(&vertical).contains(&expected));
}

/// Connectors on each border never form a rule along the clipped axis.
#[test]
fn test_border_connectors_stay_silent() {
    let corners = [
        Position::new(0, 0),
        Position::new(4, 0),
        Position::new(0, 4),
        Position::new(4, 4),
    ];

    for corner in corners {
        let mut board = Board::new(5, 5);
        board.place(corner, NounKind::ConnectorIs);

        // surround the connector with tokens wherever the board allows
        for (dx, dy) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            let pos = Position::new(corner.x + dx, corner.y + dy);
            if board.is_valid(pos) {
                board.place(pos, NounKind::SubjectRock);
                board.place(pos, NounKind::TraitPush);
            }
        }

        assert!(
            RuleExtractor::extract(&board).is_empty(),
            "corner {corner} formed a rule"
        );
    }
}

/// A mid-edge connector forms rules along the surviving axis only.
#[test]
fn test_edge_connector_uses_surviving_axis() {
    // top edge: vertical pair clipped, horizontal intact
    let mut board = Board::new(5, 5);
    board.place(Position::new(2, 0), NounKind::ConnectorIs);
    board.place(Position::new(1, 0), NounKind::SubjectRock);
    board.place(Position::new(3, 0), NounKind::TraitStop);
    board.place(Position::new(2, 1), NounKind::TraitPush);

    let rules = RuleExtractor::extract(&board);
    assert_eq!(rules.len(), 1);
    assert!(rules.contains(&Rule::new(NounKind::SubjectRock, TraitKind::Stop)));
}

// =============================================================================
// Rebinding
// =============================================================================

/// Extraction plus binding twice in a row changes nothing the second time.
#[test]
fn test_rebinding_is_idempotent() {
    let mut board = Board::new(5, 5);
    board.place(Position::new(1, 1), NounKind::SubjectRock);
    board.place(Position::new(2, 1), NounKind::ConnectorIs);
    board.place(Position::new(3, 1), NounKind::TraitPush);
    board.place(Position::new(2, 2), NounKind::SubjectWall);
    board.place(Position::new(2, 3), NounKind::TraitStop);
    board.place(Position::new(0, 4), NounKind::Rock);
    board.place(Position::new(4, 4), NounKind::Wall);

    let mut binder = BehaviorBinder::new();
    binder.rebind(&mut board);
    let after_first = board.clone();

    binder.rebind(&mut board);
    assert_eq!(board, after_first);
}

/// A rule grants its trait to every instance of the noun, wherever it is.
#[test]
fn test_binding_is_by_noun_kind_not_instance() {
    let mut board = Board::new(6, 4);
    board.place(Position::new(1, 0), NounKind::SubjectRock);
    board.place(Position::new(2, 0), NounKind::ConnectorIs);
    board.place(Position::new(3, 0), NounKind::TraitSink);

    let rocks = [
        board.place(Position::new(0, 2), NounKind::Rock),
        board.place(Position::new(5, 3), NounKind::Rock),
        board.place(Position::new(3, 1), NounKind::Rock),
    ];
    let wall = board.place(Position::new(4, 2), NounKind::Wall);

    let mut binder = BehaviorBinder::new();
    binder.rebind(&mut board);

    for rock in rocks {
        assert!(board.entity(rock).carries(TraitKind::Sink));
    }
    assert!(!board.entity(wall).carries(TraitKind::Sink));
}

/// Two arrangements can bind two traits to one noun at once.
#[test]
fn test_multiple_rules_stack_on_one_noun() {
    let mut board = Board::new(5, 5);
    board.place(Position::new(1, 1), NounKind::SubjectRock);
    board.place(Position::new(2, 1), NounKind::ConnectorIs);
    board.place(Position::new(3, 1), NounKind::TraitPush);
    board.place(Position::new(1, 2), NounKind::SubjectRock);
    board.place(Position::new(2, 2), NounKind::ConnectorIs);
    board.place(Position::new(3, 2), NounKind::TraitFloat);

    let rock = board.place(Position::new(0, 4), NounKind::Rock);

    let mut binder = BehaviorBinder::new();
    binder.rebind(&mut board);

    assert!(board.entity(rock).carries(TraitKind::Push));
    assert!(board.entity(rock).carries(TraitKind::Float));
}

/// The diff keeps unrelated rules bound while one of them breaks.
#[test]
fn test_partial_rule_break_only_revokes_its_trait() {
    let mut board = Board::new(5, 5);
    board.place(Position::new(1, 1), NounKind::SubjectRock);
    board.place(Position::new(2, 1), NounKind::ConnectorIs);
    let push_word = board.place(Position::new(3, 1), NounKind::TraitPush);
    board.place(Position::new(1, 3), NounKind::SubjectRock);
    board.place(Position::new(2, 3), NounKind::ConnectorIs);
    board.place(Position::new(3, 3), NounKind::TraitFloat);

    let rock = board.place(Position::new(0, 0), NounKind::Rock);

    let mut binder = BehaviorBinder::new();
    binder.rebind(&mut board);
    assert!(board.entity(rock).carries(TraitKind::Push));
    assert!(board.entity(rock).carries(TraitKind::Float));

    board.move_entity(push_word, Position::new(3, 1), Position::new(4, 4));
    binder.rebind(&mut board);

    assert!(!board.entity(rock).carries(TraitKind::Push));
    assert!(board.entity(rock).carries(TraitKind::Float));
}
