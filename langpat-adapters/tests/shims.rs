//! Shim behaviour against mock collaborators.

use langpat_adapters::{
    try_async_outcome_command, try_async_outcome_query, try_outcome_command, try_outcome_query,
    AsyncOutcomeCommand, AsyncOutcomeQuery, OutcomeCommand, OutcomeQuery, TryOutcomeExt,
};
use langpat_core::{Maybe, Success, Unit};
use langpat_test_utils::assertions::{assert_failure, assert_success};
use langpat_test_utils::{init_test_tracing, MockCommand, MockQuery};

#[test]
fn test_failing_query_yields_failure_with_default_payload() {
    init_test_tracing();
    let shim = try_outcome_query(MockQuery::<Maybe<String>>::failing("boom"));

    let outcome = shim.send_query(42u32);
    assert_failure(&outcome, "boom");
    assert_eq!(outcome.unwrap_or_default(), Maybe::Nothing);
    assert_eq!(shim.inner().calls(), 1);
}

#[test]
fn test_succeeding_query_yields_success() {
    let shim = try_outcome_query(MockQuery::returning(Maybe::some("v".to_string())));
    assert_eq!(shim.send_query(()), Success::of(Maybe::some("v".to_string())));
}

#[test]
fn test_query_returning_nothing_is_still_success() {
    let shim = try_outcome_query(MockQuery::returning(Maybe::<u8>::none()));
    let outcome = shim.send_query("missing");

    assert!(outcome.succeeded());
    assert_success(&outcome, &Maybe::Nothing);
}

#[test]
fn test_command_shim_records_and_reports() {
    let shim = try_outcome_command(MockCommand::rejecting(|name: &String| {
        name.is_empty().then(|| "name required".to_string())
    }));

    assert_success(&shim.send_command("ada".to_string()), &Unit);
    assert_failure(&shim.send_command(String::new()), "name required");
    assert_eq!(shim.inner().received(), vec!["ada".to_string(), String::new()]);
}

#[test]
fn test_extension_wraps_closures() {
    let parse = (|raw: &str| raw.trim().parse::<i64>()).try_outcome_query();

    assert_success(&parse.send_query(" 17 "), &17);
    assert_failure(&parse.send_query("x"), "invalid digit found in string");
}

#[tokio::test]
async fn test_async_query_shim() {
    init_test_tracing();
    let ok = try_async_outcome_query(MockQuery::returning(5u64));
    let failing = try_async_outcome_query(MockQuery::<u64>::failing("upstream timed out"));

    assert_success(&ok.send_query(()).await, &5);
    let outcome = failing.send_query(()).await;
    assert_failure(&outcome, "upstream timed out");
    assert_eq!(outcome.unwrap_or_default(), 0);
}

#[tokio::test]
async fn test_async_closure_query_shim() {
    let shim = (|id: u32| async move {
        if id == 0 {
            Err(format!("no user {}", id))
        } else {
            Ok(format!("user-{}", id))
        }
    })
    .try_async_outcome_query();

    assert_success(&shim.send_query(3).await, &"user-3".to_string());
    assert_failure(&shim.send_query(0).await, "no user 0");
}

#[test]
fn test_accepting_command_always_succeeds() {
    let shim = MockCommand::accepting().try_outcome_command();

    assert_eq!(shim.send_command(7u8), Success::ok());
    assert_eq!(shim.send_command(0u8), Success::ok());
    assert_eq!(shim.inner().received(), vec![7, 0]);
}

#[tokio::test]
async fn test_async_command_shim() {
    let shim = try_async_outcome_command(MockCommand::rejecting(|n: &i32| {
        (*n < 0).then(|| format!("{} is negative", n))
    }));

    assert_eq!(shim.send_command(1).await, Success::ok());
    assert_failure(&shim.send_command(-2).await, "-2 is negative");
    assert_eq!(shim.inner().received(), vec![1, -2]);
}
