use std::sync::{Arc, Mutex};

use optimistic::{Notify, OptimisticCell};

#[derive(Clone, Default)]
struct RecordingNotifier {
    errors: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl Notify for RecordingNotifier {
    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

#[tokio::test]
async fn renders_new_value_before_the_mutation_resolves() {
    let cell = OptimisticCell::new(Some(2u8));
    let notifier = RecordingNotifier::default();

    let (release, gate) = tokio::sync::oneshot::channel::<Result<(), String>>();

    let task = tokio::spawn({
        let cell = cell.clone();
        let notifier = notifier.clone();
        async move {
            cell.submit(Some(4), async move { gate.await.unwrap() }, &notifier)
                .await;
        }
    });

    // let the submit run up to its await point
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }

    // mutation still unresolved, but the new rating already renders
    assert_eq!(cell.get(), Some(4));
    assert!(cell.is_pending());

    release.send(Ok(())).unwrap();
    task.await.unwrap();

    assert_eq!(cell.get(), Some(4));
    assert!(!cell.is_pending());
    assert!(notifier.errors().is_empty());
}

#[tokio::test]
async fn rejection_rolls_back_and_notifies_exactly_once() {
    let cell = OptimisticCell::new(Some(2u8));
    let notifier = RecordingNotifier::default();

    cell.submit(
        Some(5),
        async { Err("You don't have permission to update this application".to_string()) },
        &notifier,
    )
    .await;

    // reverted to the pre-edit value
    assert_eq!(cell.get(), Some(2));
    assert!(!cell.is_pending());
    assert_eq!(
        notifier.errors(),
        vec!["You don't have permission to update this application".to_string()]
    );
}

#[tokio::test]
async fn independent_cells_do_not_interfere() {
    let rating = OptimisticCell::new(Some(1u8));
    let stage = OptimisticCell::new("applied".to_string());
    let notifier = RecordingNotifier::default();

    let (release_rating, rating_gate) = tokio::sync::oneshot::channel::<Result<(), String>>();

    let rating_task = tokio::spawn({
        let rating = rating.clone();
        let notifier = notifier.clone();
        async move {
            rating
                .submit(Some(3), async move { rating_gate.await.unwrap() }, &notifier)
                .await;
        }
    });

    for _ in 0..10 {
        tokio::task::yield_now().await;
    }

    // a second edit on a different cell settles while the first is in flight
    stage
        .submit("interested".to_string(), async { Ok(()) }, &notifier)
        .await;

    assert_eq!(stage.get(), "interested");
    assert_eq!(rating.get(), Some(3));
    assert!(rating.is_pending());

    release_rating.send(Err("rejected".to_string())).unwrap();
    rating_task.await.unwrap();

    assert_eq!(rating.get(), Some(1));
    assert_eq!(stage.get(), "interested");
    assert_eq!(notifier.errors(), vec!["rejected".to_string()]);
}
