use dbms::common::exception::{ContainerError, ErrorKind, StructureKind};
use dbms::container::linked_queue::LinkedQueue;
use dbms::container::linked_stack::LinkedStack;

use crate::common::logger::init_test_logger;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_push_push_pop() {
        init_test_logger();
        let mut stack = LinkedStack::new();
        stack.push("a");
        stack.push("b");
        assert_eq!(assert_ok!(stack.pop()), "b");
        assert_eq!(assert_ok!(stack.pop()), "a");
        let err = assert_err!(stack.pop());
        assert_eq!(err.kind(), ErrorKind::EmptyStructure);
        assert_eq!(err.to_string(), "Stack is empty");
    }

    #[test]
    fn queue_enqueue_enqueue_dequeue() {
        init_test_logger();
        let mut queue = LinkedQueue::new();
        queue.enqueue("a");
        queue.enqueue("b");
        assert_eq!(assert_ok!(queue.dequeue()), "a");
        assert_eq!(assert_ok!(queue.dequeue()), "b");
        assert_eq!(
            assert_err!(queue.dequeue()),
            ContainerError::EmptyStructure(StructureKind::Queue)
        );
    }

    #[test]
    fn structures_are_unbounded() {
        init_test_logger();
        let mut stack = LinkedStack::new();
        let mut queue = LinkedQueue::new();
        for i in 0..10_000 {
            stack.push(i.to_string());
            queue.enqueue(i.to_string());
        }
        assert_eq!(stack.len(), 10_000);
        assert_eq!(queue.len(), 10_000);

        for i in 0..10_000 {
            assert_eq!(assert_ok!(queue.dequeue()), i.to_string());
            assert_eq!(assert_ok!(stack.pop()), (9_999 - i).to_string());
        }
        assert!(stack.is_empty());
        assert!(queue.is_empty());
    }
}
