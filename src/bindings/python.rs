use crate::config::{ConfigError, DiagramConfig};
use crate::data::ExampleData;
use crate::diagram::TransformerDiagram;
use crate::store::NodeKey;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

fn to_py_err(e: ConfigError) -> PyErr {
    match e {
        ConfigError::Invalid(issues) => {
            let msgs: Vec<String> = issues.iter().map(|i| i.to_string()).collect();
            PyValueError::new_err(format!("Invalid example data:\n- {}", msgs.join("\n- ")))
        }
        other => PyValueError::new_err(other.to_string()),
    }
}

fn parse_node(name: &str) -> PyResult<NodeKey> {
    NodeKey::parse(name).ok_or_else(|| PyValueError::new_err(format!("Unknown stage: '{}'", name)))
}

#[pyclass(name = "_TransformerDiagram")]
#[derive(Debug, Clone)]
pub struct PyTransformerDiagram {
    inner: TransformerDiagram,
}

#[pymethods]
impl PyTransformerDiagram {
    /// `config_json` may be omitted for the default topology and centered scrolling.
    #[new]
    #[pyo3(signature = (data_json, config_json=None))]
    pub fn new(data_json: &str, config_json: Option<&str>) -> PyResult<Self> {
        let config = match config_json {
            Some(json) => DiagramConfig::from_json_str(json).map_err(to_py_err)?,
            None => DiagramConfig::default(),
        };
        let data = ExampleData::from_json_str(data_json).map_err(to_py_err)?;
        let inner = TransformerDiagram::new(config, data).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    #[staticmethod]
    pub fn example(number: u8) -> PyResult<Self> {
        let data = match number {
            1 => ExampleData::example_1(),
            2 => ExampleData::example_2(),
            _ => return Err(PyValueError::new_err(format!("No built-in example {}", number))),
        };
        let inner = TransformerDiagram::new(DiagramConfig::default(), data).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    pub fn reveal(&mut self, node: &str) -> PyResult<Vec<String>> {
        let changed = self.inner.reveal(parse_node(node)?);
        Ok(changed.iter().map(|n| n.to_string()).collect())
    }

    pub fn hide(&mut self, node: &str) -> PyResult<Vec<String>> {
        let changed = self.inner.hide(parse_node(node)?);
        Ok(changed.iter().map(|n| n.to_string()).collect())
    }

    pub fn reveal_all(&mut self) -> usize { self.inner.reveal_all().len() }
    pub fn reset(&mut self) -> usize { self.inner.reset().len() }

    pub fn is_active(&self, node: &str) -> PyResult<bool> {
        Ok(self.inner.is_active(parse_node(node)?))
    }

    pub fn latest_active(&self) -> Option<String> {
        self.inner.latest_active().map(|n| n.to_string())
    }

    pub fn display_matrix(&self, node: &str) -> PyResult<Option<Vec<Vec<String>>>> {
        Ok(self.inner.display_matrix(parse_node(node)?))
    }

    pub fn display_order(&self) -> Vec<String> {
        self.inner.dag().display_order().iter().map(|n| n.to_string()).collect()
    }

    pub fn format_diagram(&self) -> String { self.inner.format_diagram() }
    pub fn format_walkthrough(&self) -> String { self.inner.format_walkthrough() }
}
