//! Integration tests for the full bridge pipeline: host closures in, engine
//! callbacks out, results marshaled back, with lifecycle and output
//! redirection exercised the way a driver would.
//!
//! These tests play the engine: they build the callback table a solve would
//! register and drive its entries against engine buffers directly.
use std::sync::{Arc, Mutex};

use approx::assert_relative_eq;
use optbridge::bridge::marshal::read_result_vector;
use optbridge::bridge::monitor::monitor;
use optbridge::bridge::types::{Outputs, Params};
use optbridge::engine::state;
use optbridge::engine::status::SolutionStatus;
use optbridge::{
    finalize_engine, initialize_engine, install_output_hook, BridgeError, CallbackTable,
    ConfigMapping, EngineVec, HostConsole, Method, ProblemContext,
};

/// Console that collects redirected engine output for inspection.
#[derive(Default)]
struct CaptureConsole {
    out: Arc<Mutex<Vec<String>>>,
    err: Arc<Mutex<Vec<String>>>,
}

impl HostConsole for CaptureConsole {
    fn write_out(&self, text: &str) {
        self.out.lock().unwrap().push(text.to_string());
    }

    fn write_err(&self, text: &str) {
        self.err.lock().unwrap().push(text.to_string());
    }
}

#[test]
// Purpose
// -------
// A separable residual problem flows end to end: the host closure is
// registered for pounders, the engine-side entry reads the parameter
// buffer, evaluates, writes the residual buffer, and the driver reads the
// result back out.
//
// Given
// -----
// - Residuals f(x) = [x0 - 3, x1 + 1] with k = n = 2.
// - Parameter buffer holding [1, 2].
//
// Expect
// ------
// - The residual buffer holds [-2, 3] after the entry fires.
fn separable_residuals_flow_end_to_end() {
    // Arrange
    let objective = |x: &Params| -> Outputs { Params::from_vec(vec![x[0] - 3.0, x[1] + 1.0]) };
    let ctx = ProblemContext::new(2, 2, &objective).expect("valid dimensions");
    let table =
        CallbackTable::for_method(&ctx, Method::Pounders).expect("pounders table should build");

    let x = EngineVec::from_slice(&[1.0, 2.0]);
    let f = EngineVec::new(2);

    // Act
    let entry = table.separable_objective.as_ref().expect("pounders registers the entry");
    entry(&x, &f).expect("evaluation should succeed");
    let residuals = read_result_vector(&f, 2).expect("result read should succeed");

    // Assert
    assert_relative_eq!(residuals[0], -2.0);
    assert_relative_eq!(residuals[1], 3.0);
}

#[test]
// Purpose
// -------
// Engine initialization is idempotent and options never accumulate: the
// second call replaces the first call's options wholesale.
//
// The whole lifecycle lives in this one test because the engine state is
// process-wide.
fn engine_initialization_is_idempotent_and_replaces_options() {
    // Arrange
    let first: ConfigMapping =
        [("tao_type", "pounders"), ("tao_max_it", "50"), ("tao_lower_bound", "-0.5")]
            .into_iter()
            .collect();
    let second: ConfigMapping = [("tao_type", "nm")].into_iter().collect();

    // Act + Assert: first call performs full initialization, and a value
    // starting with '-' survives the token round trip intact.
    initialize_engine(&first).expect("first initialization should succeed");
    {
        let engine = state::global();
        assert!(engine.is_initialized());
        assert_eq!(engine.option("tao_type"), Some("pounders"));
        assert_eq!(engine.option("tao_max_it"), Some("50"));
        assert_eq!(engine.option("tao_lower_bound"), Some("-0.5"));
    }

    // Act + Assert: second call resets options without accumulating.
    initialize_engine(&second).expect("re-initialization should succeed");
    {
        let engine = state::global();
        assert!(engine.is_initialized());
        assert_eq!(engine.option("tao_type"), Some("nm"));
        assert_eq!(engine.option("tao_max_it"), None);
        assert_eq!(engine.options().len(), 1);
    }

    // Act + Assert: finalize tears the state down for the process.
    finalize_engine();
    assert!(!state::global().is_initialized());
}

#[test]
// Purpose
// -------
// A scalar method with a multi-output context is rejected at registration,
// before any engine buffer exists.
fn scalar_method_with_multiple_outputs_is_rejected_up_front() {
    let objective = |x: &Params| -> Outputs { x.clone() };
    let ctx = ProblemContext::new(2, 2, &objective).expect("valid dimensions");

    let err = CallbackTable::for_method(&ctx, Method::NelderMead);

    assert!(matches!(
        err,
        Err(BridgeError::SeparableOutputsUnsupported { method: "nm", outputs: 2 })
    ));
}

#[test]
// Purpose
// -------
// Once a host console is installed, monitor output flows through it instead
// of the process streams, and a second installation is refused.
//
// This is the only test in the suite that touches the process-wide output
// hook.
fn installed_console_receives_monitor_output_and_cannot_be_replaced() {
    // Arrange
    let out = Arc::new(Mutex::new(Vec::new()));
    let console = CaptureConsole { out: Arc::clone(&out), err: Arc::default() };

    // Act
    let installed = install_output_hook(Box::new(console));
    monitor(&SolutionStatus::new(7, 0.125, 1e-9, 0.0, 0.0)).expect("monitor should succeed");
    let replaced = install_output_hook(Box::new(CaptureConsole::default()));

    // Assert
    assert!(installed);
    assert!(!replaced, "a second console installation should be refused");
    let captured = out.lock().unwrap().join("");
    assert_eq!(captured, "iter =   7, Function value 0.125, Residual: < 1.0e-6 \n");
}
