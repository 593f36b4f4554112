use stacalc::staque::{Queue, Stack, StaqueAction, action::apply_actions, core::Staque};

#[test]
fn stack_is_last_in_first_out() {
    let mut stack = Stack::new();
    stack.add(1);
    stack.add(2);
    stack.add(3);

    assert_eq!(stack.len(), 3);
    assert_eq!(stack.extract(), Some(3));
    assert_eq!(stack.extract(), Some(2));
    assert_eq!(stack.extract(), Some(1));
    assert_eq!(stack.extract(), None);
    assert!(stack.is_empty());
}

#[test]
fn queue_is_first_in_first_out() {
    let mut queue = Queue::new();
    queue.add(1);
    queue.add(2);
    queue.add(3);

    assert_eq!(queue.len(), 3);
    assert_eq!(queue.extract(), Some(1));
    assert_eq!(queue.extract(), Some(2));
    assert_eq!(queue.extract(), Some(3));
    assert_eq!(queue.extract(), None);
    assert!(queue.is_empty());
}

#[test]
fn get_does_not_remove() {
    let mut stack = Stack::new();
    stack.add(7);

    assert_eq!(stack.get(), Some(&7));
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.extract(), Some(7));
    assert_eq!(stack.get(), None);
}

#[test]
fn iteration_order_matches_extraction_order() {
    let stack: Stack<i32> = [1, 2, 3].into_iter().collect();
    assert_eq!(stack.items().copied().collect::<Vec<_>>(), vec![3, 2, 1]);

    let queue: Queue<i32> = [1, 2, 3].into_iter().collect();
    assert_eq!(queue.items().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn display_lists_items_front_first() {
    let stack: Stack<i32> = [1, 2, 3].into_iter().collect();
    assert_eq!(stack.to_string(), "3 2 1");

    let queue: Queue<i32> = [1, 2, 3].into_iter().collect();
    assert_eq!(queue.to_string(), "1 2 3");

    let empty: Stack<i32> = Stack::new();
    assert_eq!(empty.to_string(), "");
}

#[test]
fn actions_replay_against_a_stack() {
    let mut stack = Stack::new();
    let actions = [StaqueAction::Add(1),
                   StaqueAction::Add(2),
                   StaqueAction::Get,
                   StaqueAction::Extract,
                   StaqueAction::Add(3)];

    assert!(apply_actions(&mut stack, &actions, false));
    assert_eq!(stack.items().copied().collect::<Vec<_>>(), vec![3, 1]);
}

#[test]
fn actions_replay_against_a_queue() {
    let mut queue = Queue::new();
    let actions = [StaqueAction::Add(1),
                   StaqueAction::Add(2),
                   StaqueAction::Extract,
                   StaqueAction::Add(3)];

    assert!(apply_actions(&mut queue, &actions, false));
    assert_eq!(queue.items().copied().collect::<Vec<_>>(), vec![2, 3]);
}

#[test]
fn replay_stops_on_empty_container() {
    let mut stack: Stack<i32> = Stack::new();
    assert!(!apply_actions(&mut stack, &[StaqueAction::Extract], false));
    assert!(!apply_actions(&mut stack, &[StaqueAction::Get], false));

    // The stop happens mid-batch; everything before it still applies.
    let actions = [StaqueAction::Add(5), StaqueAction::Extract, StaqueAction::Extract];
    assert!(!apply_actions(&mut stack, &actions, false));
    assert!(stack.is_empty());
}

#[test]
fn long_chains_drop_without_overflowing() {
    let mut stack = Stack::new();
    for value in 0..200_000 {
        stack.add(value);
    }
    drop(stack);
}
