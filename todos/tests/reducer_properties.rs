//! Property tests for the items reducer

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use composable_todos_core::environment::AtomicIdGenerator;
use proptest::prelude::*;
use std::sync::Arc;
use todos::{reduce, ActionFactory, TodoAction, TodoId, TodoItem, TodoList, VisibilityFilter};

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Toggle(u64),
    Filter(String),
    Unknown,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => "[a-z ]{1,12}".prop_map(Op::Add),
        2 => (0u64..16).prop_map(Op::Toggle),
        1 => prop_oneof![
            Just(VisibilityFilter::SHOW_ALL.to_string()),
            Just(VisibilityFilter::SHOW_ACTIVE.to_string()),
            "[A-Z_]{1,10}",
        ]
        .prop_map(Op::Filter),
        1 => Just(Op::Unknown),
    ]
}

fn to_action(factory: &ActionFactory, op: &Op) -> TodoAction {
    match op {
        Op::Add(text) => factory.add_todo(text.clone()),
        Op::Toggle(id) => factory.toggle_todo(TodoId::new(*id)),
        Op::Filter(token) => factory.set_visibility_filter(VisibilityFilter::new(token.clone())),
        Op::Unknown => TodoAction::Unknown,
    }
}

fn build(ops: &[Op]) -> TodoList {
    let factory = ActionFactory::new(Arc::new(AtomicIdGenerator::new()));
    ops.iter()
        .fold(TodoList::new(), |list, op| reduce(&list, &to_action(&factory, op)))
}

fn snapshot(list: &TodoList) -> Vec<TodoItem> {
    list.iter().cloned().collect()
}

proptest! {
    #[test]
    fn adds_produce_one_item_each_with_increasing_ids(
        texts in prop::collection::vec("[a-z]{1,8}", 0..40)
    ) {
        let factory = ActionFactory::new(Arc::new(AtomicIdGenerator::new()));
        let list = texts
            .iter()
            .fold(TodoList::new(), |list, text| reduce(&list, &factory.add_todo(text.clone())));

        prop_assert_eq!(list.len(), texts.len());

        let ids: Vec<u64> = list.iter().map(|item| item.id.value()).collect();
        prop_assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));

        let stored: Vec<&str> = list.iter().map(|item| item.text.as_str()).collect();
        let expected: Vec<&str> = texts.iter().map(String::as_str).collect();
        prop_assert_eq!(stored, expected);
        prop_assert!(list.iter().all(|item| !item.completed));
    }

    #[test]
    fn non_item_actions_return_the_same_list(
        ops in prop::collection::vec(arb_op(), 0..30),
        token in "[A-Z_]{0,12}",
    ) {
        let list = build(&ops);

        let after_unknown = reduce(&list, &TodoAction::Unknown);
        let after_filter = reduce(
            &list,
            &TodoAction::SetVisibilityFilter { filter: VisibilityFilter::new(token) },
        );

        prop_assert!(TodoList::ptr_eq(&list, &after_unknown));
        prop_assert!(TodoList::ptr_eq(&list, &after_filter));
    }

    #[test]
    fn toggling_twice_restores_completion(ops in prop::collection::vec(arb_op(), 1..30)) {
        let list = build(&ops);

        for item in list.iter() {
            let toggle = TodoAction::ToggleTodo { id: item.id };
            let once = reduce(&list, &toggle);
            let twice = reduce(&once, &toggle);

            prop_assert_eq!(once.get(item.id).map(|i| i.completed), Some(!item.completed));
            prop_assert_eq!(&twice, &list);
        }
    }

    #[test]
    fn toggling_absent_id_keeps_content(
        ops in prop::collection::vec(arb_op(), 0..30),
        offset in 0u64..1000,
    ) {
        let list = build(&ops);
        let missing = TodoId::new(list.len() as u64 + offset);

        let after = reduce(&list, &TodoAction::ToggleTodo { id: missing });

        prop_assert_eq!(after, list);
    }

    #[test]
    fn reduce_never_mutates_its_input(
        ops in prop::collection::vec(arb_op(), 0..30),
        next in arb_op(),
    ) {
        let list = build(&ops);
        let before = snapshot(&list);
        let factory = ActionFactory::new(Arc::new(AtomicIdGenerator::starting_at(1000)));
        let action = to_action(&factory, &next);
        let action_before = action.clone();

        let _ = reduce(&list, &action);

        prop_assert_eq!(snapshot(&list), before);
        prop_assert_eq!(action, action_before);
    }
}

#[test]
fn buy_milk_walk_dog_scenario() {
    let factory = ActionFactory::new(Arc::new(AtomicIdGenerator::new()));

    let list = TodoList::new();
    let list = reduce(&list, &factory.add_todo("buy milk"));
    assert_eq!(
        snapshot(&list),
        vec![TodoItem::new(TodoId::new(0), "buy milk".to_string())]
    );

    let list = reduce(&list, &factory.add_todo("walk dog"));
    assert_eq!(
        snapshot(&list),
        vec![
            TodoItem::new(TodoId::new(0), "buy milk".to_string()),
            TodoItem::new(TodoId::new(1), "walk dog".to_string()),
        ]
    );

    let list = reduce(&list, &factory.toggle_todo(TodoId::new(0)));
    assert_eq!(
        snapshot(&list),
        vec![
            TodoItem {
                id: TodoId::new(0),
                text: "buy milk".to_string(),
                completed: true,
            },
            TodoItem::new(TodoId::new(1), "walk dog".to_string()),
        ]
    );
}
