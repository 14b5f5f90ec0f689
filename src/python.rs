use crate::export::{export_filename, serialize};
use crate::flow::Flow;
use crate::paths::{PathStep, enumerate_paths};
use crate::ui::flow_from_json;
use crate::validate::{ValidationReport, validate};
use pyo3::prelude::*;
use pyo3::types::PyDict;

impl<'py> IntoPyObject<'py> for ValidationReport {
    type Target = PyDict;
    type Output = Bound<'py, Self::Target>;
    type Error = PyErr;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let dict = PyDict::new(py);
        dict.set_item("valid", self.valid)?;
        dict.set_item("errors", self.errors)?;
        dict.set_item("warnings", self.warnings)?;
        Ok(dict)
    }
}

impl<'py> IntoPyObject<'py> for PathStep {
    type Target = PyDict;
    type Output = Bound<'py, Self::Target>;
    type Error = PyErr;

    fn into_pyobject(self, py: Python<'py>) -> Result<Self::Output, Self::Error> {
        let dict = PyDict::new(py);
        dict.set_item("nodeId", self.node_id)?;
        // Mirrors the wire shape: the key is absent for unlabelled steps.
        if let Some(via) = self.via {
            dict.set_item("via", via)?;
        }
        Ok(dict)
    }
}

/// A structural validation and canonical serialization engine for
/// conversational flow graphs.
///
/// This class parses a flow definition upon initialization. The inspection
/// and export methods can then be called repeatedly without re-parsing.
#[pyclass(name = "Keiro")]
struct KeiroPy {
    flow: Flow,
}

#[pymethods]
impl KeiroPy {
    /// Initializes the engine from a flow definition.
    ///
    /// Args:
    ///     flow_json (str): A string containing the JSON definition of the
    ///         flow, including nodes, edges, and metadata.
    ///
    /// Returns:
    ///     Keiro: An initialized instance holding the parsed flow.
    ///
    /// Raises:
    ///     ValueError: If the JSON is malformed or a node carries an
    ///         unknown kind.
    #[new]
    fn new(flow_json: &str) -> PyResult<Self> {
        let flow = flow_from_json(flow_json)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
        Ok(KeiroPy { flow })
    }

    /// Runs every structural rule against the flow.
    ///
    /// Returns:
    ///     dict: A dictionary with three keys:
    ///         - "valid" (bool): True when no rule produced an error.
    ///         - "errors" (list[str]): Blocking structural problems.
    ///         - "warnings" (list[str]): Advisory findings.
    fn validate(&self) -> ValidationReport {
        validate(&self.flow)
    }

    /// Enumerates every simple root-to-terminal conversation path.
    ///
    /// Returns:
    ///     list[list[dict]]: One list of steps per path. Each step carries
    ///         "nodeId" (str) and, when the edge taken was labelled,
    ///         "via" (str).
    fn enumerate_paths(&self) -> Vec<Vec<PathStep>> {
        enumerate_paths(&self.flow)
    }

    /// Renders the canonical text document for the flow.
    ///
    /// Returns:
    ///     str: Deterministic YAML-shaped text, stable across node and
    ///         edge declaration order.
    fn to_yaml(&self) -> String {
        serialize(&self.flow)
    }

    /// Suggested download filename for the exported document.
    ///
    /// Returns:
    ///     str: A slug of the flow's name (or id) with a ".yaml" extension.
    fn export_filename(&self) -> String {
        export_filename(&self.flow)
    }
}

/// Structural validation and canonical serialization for conversational
/// flow graphs.
///
/// This module provides Python bindings to the Keiro Rust library, letting a
/// backend validate flows, enumerate their conversation paths, and export
/// canonical documents without reimplementing the rules.
#[pymodule]
fn keiro(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<KeiroPy>()?;
    Ok(())
}
