//! Filter Utilities
//!
//! Status-based selection over the todo list.

use crate::models::{Status, Todo};

/// Todos visible under `status`, in list order
pub fn filter_todos(todos: &[Todo], status: Status) -> Vec<Todo> {
    todos
        .iter()
        .filter(|todo| status.matches(todo))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn make_todo(id: u32, completed: bool) -> Todo {
        Todo {
            id,
            title: format!("Todo {}", id),
            user_id: 1,
            completed,
        }
    }

    #[test]
    fn test_filter_todos() {
        let todos = vec![
            make_todo(1, false),
            make_todo(2, true),
            make_todo(3, false),
            make_todo(4, true),
        ];

        let ids = |status| -> Vec<u32> {
            filter_todos(&todos, status).iter().map(|t| t.id).collect()
        };

        assert_eq!(ids(Status::All), vec![1, 2, 3, 4]);
        assert_eq!(ids(Status::Active), vec![1, 3]);
        assert_eq!(ids(Status::Completed), vec![2, 4]);
    }

    #[test]
    fn test_filter_empty() {
        for status in Status::ALL {
            assert!(filter_todos(&[], status).is_empty());
        }
    }

    fn status_strategy() -> impl Strategy<Value = Status> {
        prop_oneof![
            Just(Status::All),
            Just(Status::Active),
            Just(Status::Completed),
        ]
    }

    proptest! {
        #[test]
        fn filter_is_an_ordered_subset(
            flags in prop::collection::vec(any::<bool>(), 0..32),
            status in status_strategy(),
        ) {
            let todos: Vec<Todo> = flags
                .iter()
                .enumerate()
                .map(|(i, done)| make_todo(i as u32 + 1, *done))
                .collect();

            let filtered = filter_todos(&todos, status);

            prop_assert!(filtered.iter().all(|t| status.matches(t)));
            prop_assert_eq!(
                filtered.len(),
                todos.iter().filter(|t| status.matches(t)).count()
            );
            let ids: Vec<u32> = filtered.iter().map(|t| t.id).collect();
            prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
            if status == Status::All {
                prop_assert_eq!(&filtered, &todos);
            }
            prop_assert_eq!(filter_todos(&filtered, status), filtered.clone());
        }
    }
}
