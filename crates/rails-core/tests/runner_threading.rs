//! Secuenciación de steps en el Runner.

use std::cell::RefCell;
use std::rc::Rc;

use rails_core::{rails_step, steps, Advance, Context, DataBox, Exhaustion, RailsError, RunEventKind, Runner,
                 RunnerOptions, StepType};
use serde_json::json;

rails_step! {
    pub struct S1;
    fn step_init(scope) {
        scope.dbx.put("data", 0);
        Ok(())
    }
    fn step_increment(scope) {
        bump(scope, 1)
    }
}

rails_step! {
    pub struct S2;
    fn step_add_two(scope) {
        bump(scope, 2)
    }
}

rails_step! {
    /// Lee un umbral del context y deja una marca en él.
    pub struct UsesContext;
    fn step_read(scope) {
        let threshold: i64 = scope.ctx.get_as("threshold")?;
        scope.dbx.put("threshold_seen", threshold);
        scope.ctx.put("visited", true);
        Ok(())
    }
}

rails_step! {
    pub struct Explodes;
    fn step_partial(scope) {
        scope.dbx.put("partial", true);
        Ok(())
    }
    fn step_explode(_scope) {
        Err(RailsError::failed("explode"))
    }
}

fn bump(scope: &mut rails_core::StepScope<'_>, n: i64) -> Result<(), RailsError> {
    let current: i64 = scope.dbx.get_as("data")?;
    scope.dbx.put("data", current + n);
    Ok(())
}

#[test]
fn runner_end_to_end_threads_the_databox() {
    let mut runner = Runner::new(steps![S1, S2]);
    let summary = runner.run().unwrap();

    assert_eq!(summary.steps_run, vec!["S1", "S2"]);
    assert_eq!(summary.position, 2);
    assert_eq!(runner.databox().get("data").unwrap(), &json!(3));
}

#[test]
fn constructor_defaults() {
    let runner = Runner::new(steps![S1, S2]);
    assert_eq!(runner.position(), 0);
    assert_eq!(runner.len(), 2);
    assert!(runner.databox().is_empty());
    assert!(runner.context().is_empty());
    assert_eq!(runner.options(), RunnerOptions::default());
}

#[test]
fn advance_moves_position_and_reports_completion() {
    let mut runner = Runner::new(steps![S1, S2]);
    assert_eq!(runner.current_step(), Some(StepType::of::<S1>()));

    assert_eq!(runner.advance().unwrap(), Advance::Advanced("S1"));
    assert_eq!(runner.position(), 1);
    assert_eq!(runner.current_step().map(|s| s.name()), Some("S2"));

    assert_eq!(runner.advance().unwrap(), Advance::Advanced("S2"));
    assert_eq!(runner.position(), 2);
    assert_eq!(runner.current_step(), None);

    // silent por defecto: no es un error
    assert_eq!(runner.advance().unwrap(), Advance::Completed);
    assert_eq!(runner.advance().unwrap(), Advance::Completed);
    assert_eq!(runner.position(), 2);
}

#[test]
fn strict_mode_errors_on_every_call_after_exhaustion() {
    let mut runner = Runner::builder().steps(steps![S1]).exhaustion(Exhaustion::Strict).build();
    runner.advance().unwrap();
    assert!(matches!(runner.advance(), Err(RailsError::StepsExhausted)));
    assert!(matches!(runner.advance(), Err(RailsError::StepsExhausted)));
    // la política se puede forzar por llamada
    assert_eq!(runner.advance_with(Exhaustion::Silent).unwrap(), Advance::Completed);

    runner.reset();
    assert_eq!(runner.advance().unwrap(), Advance::Advanced("S1"));
}

#[test]
fn run_is_a_noop_until_reset() {
    let mut runner = Runner::new(steps![S1, S2]);
    runner.run().unwrap();

    let again = runner.run().unwrap();
    assert!(again.steps_run.is_empty());
    assert_eq!(runner.databox().get("data").unwrap(), &json!(3));
}

#[test]
fn reset_rewinds_without_discarding_the_databox() {
    let mut runner = Runner::new(steps![S2]);
    runner.databox_mut().put("data", 10);
    runner.run().unwrap();
    assert_eq!(runner.databox().get("data").unwrap(), &json!(12));

    runner.reset();
    assert_eq!(runner.position(), 0);
    assert_eq!(runner.databox().get("data").unwrap(), &json!(12));
    runner.run().unwrap();
    assert_eq!(runner.databox().get("data").unwrap(), &json!(14));

    runner.reset();
    let old = runner.replace_databox(DataBox::new().with("data", 0));
    assert_eq!(old.get("data").unwrap(), &json!(14));
    runner.run().unwrap();
    assert_eq!(runner.databox().get("data").unwrap(), &json!(2));
}

#[test]
fn context_is_shared_across_steps() {
    let runner_ctx = Context::new().with("threshold", 7);
    let mut runner = Runner::with_parts(steps![UsesContext, S1], None, Some(runner_ctx));
    runner.run().unwrap();

    assert_eq!(runner.databox().get("threshold_seen").unwrap(), &json!(7));
    assert_eq!(runner.context().get("visited").unwrap(), &json!(true));
    let (dbx, ctx) = runner.into_parts();
    assert_eq!(dbx.list_contents(), vec!["threshold_seen", "data"]);
    assert_eq!(ctx.list_contents(), vec!["threshold", "visited"]);
}

#[test]
fn initial_databox_is_passed_to_the_first_step() {
    let dbx = DataBox::new().with("data", 40);
    let mut runner = Runner::with_parts(steps![S2], Some(dbx), None);
    runner.run().unwrap();
    assert_eq!(runner.databox().get("data").unwrap(), &json!(42));
}

#[test]
fn failing_step_keeps_partial_state_and_position() {
    let mut runner = Runner::new(steps![S1, Explodes, S2]);
    let err = runner.run().unwrap_err();

    assert!(matches!(&err, RailsError::Failed(msg) if msg == "explode"));
    assert_eq!(runner.position(), 1);
    assert_eq!(runner.databox().get("data").unwrap(), &json!(1));
    assert_eq!(runner.databox().get("partial").unwrap(), &json!(true));
    assert_eq!(runner.current_step().map(|s| s.name()), Some("Explodes"));
}

#[test]
fn builder_hooks_fire_once_per_step() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let entries = Rc::clone(&log);
    let exits = Rc::clone(&log);

    let mut runner = Runner::builder().step::<S1>()
                                      .step::<S2>()
                                      .on_step_entry(move |name| entries.borrow_mut().push(format!("enter {name}")))
                                      .on_step_exit(move |name| exits.borrow_mut().push(format!("exit {name}")))
                                      .build();
    runner.run().unwrap();

    assert_eq!(*log.borrow(), vec!["enter S1", "exit S1", "enter S2", "exit S2"]);
}

#[test]
fn events_record_the_run() {
    let mut runner = Runner::new(steps![S1, S2]);
    runner.run().unwrap();
    runner.reset();

    let kinds: Vec<RunEventKind> = runner.events().into_iter().map(|e| e.kind).collect();
    assert_eq!(kinds.len(), 6);
    assert_eq!(kinds[0], RunEventKind::StepStarted { step_index: 0, step: "S1".into() });
    assert_eq!(kinds[1],
               RunEventKind::StepFinished { step_index: 0,
                                            step: "S1".into(),
                                            operations: vec!["step_init".into(), "step_increment".into()] });
    assert!(matches!(kinds[4], RunEventKind::PipelineCompleted { steps_run: 2 }));
    assert_eq!(kinds[5], RunEventKind::RunnerReset);
    assert!(runner.events().iter().all(|e| e.run_id == runner.run_id()));
}

#[test]
fn failed_steps_are_recorded() {
    let mut runner = Runner::new(steps![Explodes]);
    assert!(runner.advance().is_err());
    let last = runner.events().pop().expect("events");
    assert!(matches!(last.kind, RunEventKind::StepFailed { step_index: 0, ref error, .. } if error == "explode"));
}

#[test]
fn empty_runner_completes_immediately() {
    let mut runner = Runner::new(Vec::new());
    assert!(runner.is_empty());
    assert!(runner.run().unwrap().steps_run.is_empty());
    assert_eq!(runner.advance().unwrap(), Advance::Completed);
}
