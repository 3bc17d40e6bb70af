//! End-to-end scenario vectors.
//!
//! Each vector runs one filter activation against the clinic registry and
//! records the verdict, the bound set and any warnings emitted. Hosts
//! embedding their own collaborators can replay the same cases.

use tracing::Level;

use locgate::FilterVerdict;
use locgate_core::{
    AccessSet, LocationId, User, LOCATION_USER_PROPERTY_NAME, LOCATION_UUIDS_PARAMETER,
};

use crate::capture::LogCapture;
use crate::fixtures::TestFixture;

/// A single scenario vector.
#[derive(Debug, Clone)]
pub struct ScenarioVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Signed-in user, if any.
    pub user: Option<User>,
    /// Filter name raised by the host.
    pub filter_name: &'static str,
    /// Expected verdict.
    pub expected_verdict: FilterVerdict,
    /// Expected `locationUuids` binding; `None` means nothing is bound.
    pub expected_locations: Option<Vec<&'static str>>,
    /// Text expected in a WARN line, if a warning is expected.
    pub expected_warning: Option<&'static str>,
}

/// What a vector actually produced.
#[derive(Debug, Clone)]
pub struct VectorOutcome {
    pub verdict: FilterVerdict,
    pub bound: Option<AccessSet>,
    pub warnings: Vec<String>,
}

impl ScenarioVector {
    /// Compare an outcome with this vector's expectations.
    pub fn check(&self, outcome: &VectorOutcome) -> Result<(), String> {
        if outcome.verdict != self.expected_verdict {
            return Err(format!(
                "verdict {:?}, expected {:?}",
                outcome.verdict, self.expected_verdict
            ));
        }

        let bound = outcome.bound.as_ref().map(AccessSet::to_strings);
        let expected = self
            .expected_locations
            .as_ref()
            .map(|l| {
                let mut l: Vec<String> = l.iter().map(|s| s.to_string()).collect();
                l.sort();
                l
            });
        if bound != expected {
            return Err(format!("bound {:?}, expected {:?}", bound, expected));
        }

        if let Some(text) = self.expected_warning {
            if !outcome.warnings.iter().any(|w| w.contains(text)) {
                return Err(format!("no warning mentioning {:?}", text));
            }
        }

        Ok(())
    }
}

/// Get all scenario vectors.
pub fn all_vectors() -> Vec<ScenarioVector> {
    vec![
        ScenarioVector {
            name: "super user bypasses the filter",
            user: Some(User::new("root").super_user()),
            filter_name: "patient_location_based_filter_obs",
            expected_verdict: FilterVerdict::Skip,
            expected_locations: None,
            expected_warning: None,
        },
        ScenarioVector {
            name: "configured location includes children",
            user: Some(User::new("alice").with_property(LOCATION_USER_PROPERTY_NAME, "a")),
            filter_name: "patient_location_based_filter",
            expected_verdict: FilterVerdict::Engage,
            expected_locations: Some(vec!["a", "b"]),
            expected_warning: None,
        },
        ScenarioVector {
            name: "unresolvable configured location is dropped",
            user: Some(User::new("bob").with_property(LOCATION_USER_PROPERTY_NAME, "c,zzz")),
            filter_name: "patient_location_based_filter",
            expected_verdict: FilterVerdict::Engage,
            expected_locations: Some(vec!["c", "d"]),
            expected_warning: None,
        },
        ScenarioVector {
            name: "blank property falls back to session location",
            user: Some(
                User::new("carol")
                    .with_property(LOCATION_USER_PROPERTY_NAME, "")
                    .with_session_location(LocationId(1)),
            ),
            filter_name: "patient_location_based_filter",
            expected_verdict: FilterVerdict::Engage,
            expected_locations: Some(vec!["a", "b"]),
            expected_warning: None,
        },
        ScenarioVector {
            name: "no property and no session falls back to privileges",
            user: Some(User::new("dave").with_privilege("LocationAccess C")),
            filter_name: "patient_location_based_filter",
            expected_verdict: FilterVerdict::Engage,
            expected_locations: Some(vec!["c", "d"]),
            expected_warning: None,
        },
        ScenarioVector {
            name: "nothing configured binds the empty set",
            user: Some(User::new("eve")),
            filter_name: "patient_location_based_filter",
            expected_verdict: FilterVerdict::Engage,
            expected_locations: Some(vec![]),
            expected_warning: Some("eve"),
        },
        ScenarioVector {
            name: "foreign filter is left untouched",
            user: Some(User::new("alice").with_property(LOCATION_USER_PROPERTY_NAME, "a")),
            filter_name: "some_other_filter",
            expected_verdict: FilterVerdict::Engage,
            expected_locations: None,
            expected_warning: None,
        },
    ]
}

/// Run a vector against a fresh clinic fixture.
pub fn run_vector(vector: &ScenarioVector) -> VectorOutcome {
    let fixture = TestFixture::new();
    if let Some(user) = &vector.user {
        fixture.sign_in(user.clone());
    }

    let capture = LogCapture::new();
    let (verdict, bag) = capture.run(|| fixture.activate(vector.filter_name));

    VectorOutcome {
        verdict,
        bound: bag.parameter(LOCATION_UUIDS_PARAMETER).cloned(),
        warnings: capture.lines_at(Level::WARN),
    }
}

/// Run every vector.
///
/// Returns `(name, passed, detail)` per vector; `detail` is empty on success.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| {
            let outcome = run_vector(v);
            match v.check(&outcome) {
                Ok(()) => (v.name.to_string(), true, String::new()),
                Err(detail) => (v.name.to_string(), false, detail),
            }
        })
        .collect()
}
