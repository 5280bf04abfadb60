//! Scenario runner.
//!
//! A scenario is an ordered list of attribute requests, each paired with
//! the outcome it must produce.

use morph_core::{Host, Value};
use morph_dispatch::{AttributeRequest, DispatchOutcome, Router, SetOutcome};
use morph_registry::Registry;

use crate::error::{ScenarioError, ScenarioResult};

/// Expected outcome of one step.
#[derive(Debug, Default, Clone)]
pub struct Expect {
    value: Option<Value>,
    handlers: Option<Vec<String>>,
    delegated: Option<bool>,
}

impl Expect {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value read, or the result of the last set mutator.
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// The set handlers invoked, in order.
    pub fn handlers(mut self, names: &[&str]) -> Self {
        self.handlers = Some(names.iter().map(|n| n.to_string()).collect());
        self
    }

    /// The set fell through to the host's baseline.
    pub fn delegated(mut self) -> Self {
        self.delegated = Some(true);
        self
    }

    fn verify(&self, outcome: &DispatchOutcome) -> Result<(), String> {
        if let Some(expected) = &self.value {
            match outcome.value() {
                Some(actual) if actual == expected => {}
                actual => return Err(format!("expected value {}, got {:?}", expected, actual)),
            }
        }

        let set = match outcome {
            DispatchOutcome::Set(set) => Some(set),
            DispatchOutcome::Got(_) => None,
        };

        if let Some(expected) = &self.handlers {
            let actual = set.map(SetOutcome::handlers).unwrap_or_default();
            if actual != expected.as_slice() {
                return Err(format!("expected handlers {:?}, got {:?}", expected, actual));
            }
        }

        if let Some(expected) = self.delegated {
            let actual = set.is_some_and(SetOutcome::is_delegated);
            if actual != expected {
                return Err(format!("expected delegated={}, got {}", expected, actual));
            }
        }

        Ok(())
    }
}

/// One request and its expectation.
#[derive(Debug, Clone)]
pub struct Step {
    pub request: AttributeRequest,
    pub expect: Expect,
}

/// An ordered list of steps replayed against one host.
#[derive(Debug, Clone)]
pub struct Scenario {
    name: String,
    steps: Vec<Step>,
}

impl Scenario {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    /// Add a set step.
    pub fn set(
        mut self,
        name: &str,
        value: impl Into<Value>,
        expect: impl FnOnce(Expect) -> Expect,
    ) -> Self {
        self.steps.push(Step {
            request: AttributeRequest::set(name, value),
            expect: expect(Expect::new()),
        });
        self
    }

    /// Add a get step.
    pub fn get(mut self, name: &str, expect: impl FnOnce(Expect) -> Expect) -> Self {
        self.steps.push(Step {
            request: AttributeRequest::get(name),
            expect: expect(Expect::new()),
        });
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Replay every step against `host`, stopping at the first failure.
    pub fn run<H: Host + 'static>(&self, registry: &Registry<H>, host: &mut H) -> ScenarioResult<()> {
        let router = Router::new(registry);

        for (index, step) in self.steps.iter().enumerate() {
            let request = describe(&step.request);
            let outcome = router
                .dispatch(host, step.request.clone())
                .map_err(|source| ScenarioError::Dispatch {
                    scenario: self.name.clone(),
                    step: index + 1,
                    request: request.clone(),
                    source,
                })?;

            step.expect
                .verify(&outcome)
                .map_err(|message| ScenarioError::Assertion {
                    scenario: self.name.clone(),
                    step: index + 1,
                    request,
                    message,
                })?;
        }

        Ok(())
    }
}

fn describe(request: &AttributeRequest) -> String {
    match request {
        AttributeRequest::Get { name } => format!("get {}", name),
        AttributeRequest::Set { name, value } => format!("set {} = {}", name, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morph_core::attrs;

    #[test]
    fn test_scenario_collects_steps() {
        let scenario = Scenario::new("collect")
            .set("title", "x", |e| e.delegated())
            .get("title", |e| e.value("x"));

        assert_eq!(scenario.steps().len(), 2);
        assert_eq!(scenario.steps()[1].request, AttributeRequest::get("title"));
    }

    #[test]
    fn test_expect_reports_mismatch() {
        let outcome = DispatchOutcome::Got(Value::from("a"));

        let err = Expect::new().value("b").verify(&outcome).unwrap_err();

        assert!(err.contains("expected value \"b\""));
        assert!(Expect::new().delegated().verify(&outcome).is_err());
        assert!(Expect::new()
            .value(Value::Map(attrs! {}))
            .verify(&DispatchOutcome::Set(SetOutcome::Delegated))
            .is_err());
    }
}
