use outcome::{run, Computation};

#[test]
fn run_should_dispatch_call_synchronously() {
    // act
    let dispatched = run(Computation::call(|| 21 * 2));

    // assert
    assert!(dispatched.is_ready());
    assert_eq!(dispatched.ready().unwrap().unwrap(), 42);
}

#[test]
fn run_should_catch_panic_from_call() {
    // act
    let dispatched = run(Computation::call(|| -> i32 { panic!("routed boom") }));

    // assert
    let outcome = dispatched.ready().unwrap();
    assert_eq!(outcome.unwrap_err().message(), "routed boom");
}

#[tokio::test]
async fn run_should_dispatch_deferred_to_await() {
    // act
    let dispatched = run(Computation::defer(async { 21 * 2 }));

    // assert
    assert!(!dispatched.is_ready());
    assert_eq!(dispatched.settle().await.unwrap(), 42);
}

#[tokio::test]
async fn run_should_catch_panic_from_deferred() {
    // act
    let dispatched = run(Computation::defer(async {
        panic!("deferred routed boom");
    }));

    // assert
    let outcome = dispatched.settle().await;
    assert_eq!(outcome.unwrap_err().message(), "deferred routed boom");
}

#[tokio::test]
async fn settle_should_pass_ready_outcome_through() {
    // act
    let dispatched = run(Computation::call(|| "done"));

    // assert
    assert_eq!(dispatched.settle().await.unwrap(), "done");
}

#[test]
fn ready_should_be_none_for_deferred() {
    // act
    let dispatched = run(Computation::defer(async { 1 }));

    // assert
    assert!(dispatched.ready().is_none());
}
