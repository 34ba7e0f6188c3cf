//! Typed wrappers for the labelled module families of a process.

use fsim_core::pset::{Parameter, Pset};
use fsim_core::InputTag;
use serde::{Deserialize, Serialize};

/// Event source declaration: a type name plus its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    /// Framework type implementing the source, e.g. `PoolSource`.
    pub type_name: String,
    /// Source parameters.
    pub params: Pset,
}

impl Source {
    /// Creates a source of the given type with empty parameters.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            params: Pset::new(),
        }
    }

    /// Creates a `PoolSource` reading the given files.
    pub fn pool_source(file_names: Vec<&str>) -> Self {
        let mut source = Self::new("PoolSource");
        source
            .params
            .insert("fileNames", Parameter::untracked(file_names));
        source
    }
}

/// Producer declaration together with the product instances it registers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdProducer {
    /// Framework type implementing the producer.
    pub type_name: String,
    /// Producer parameters.
    pub params: Pset,
    /// Instance labels of the products this producer registers; the empty
    /// string denotes the default instance.
    #[serde(default)]
    pub products: Vec<String>,
}

impl EdProducer {
    /// Creates a producer, pre-populating the product list for known types.
    pub fn new(type_name: impl Into<String>) -> Self {
        let type_name = type_name.into();
        let products = known_products(&type_name);
        Self {
            type_name,
            params: Pset::new(),
            products,
        }
    }

    /// Overrides the registered product instances.
    pub fn with_products(mut self, products: Vec<&str>) -> Self {
        self.products = products.into_iter().map(str::to_string).collect();
        self
    }

    /// Whether the producer registers a product under `instance`.
    pub fn registers(&self, instance: &str) -> bool {
        self.products.iter().any(|label| label == instance)
    }

    /// Tag referring to one of this producer's products.
    pub fn product_tag(&self, label: &str, instance: &str) -> InputTag {
        InputTag::with_instance(label, instance)
    }
}

/// Product instances registered by the producer types this model knows
/// about. Unknown types start with an empty list and rely on
/// [`EdProducer::with_products`].
pub fn known_products(type_name: &str) -> Vec<String> {
    let labels: &[&str] = match type_name {
        "FastSimProducer" => &[
            "",
            "TrackerHits",
            "MuonCSCHits",
            "MuonDTHits",
            "MuonRPCHits",
            "EcalHitsEB",
            "EcalHitsEE",
            "EcalHitsES",
            "HcalHits",
        ],
        "TrackerSimHitProducer" => &["", "TrackerHits"],
        _ => &[],
    };
    labels.iter().map(|label| label.to_string()).collect()
}

/// Output module declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputModule {
    /// Framework type implementing the output module.
    pub type_name: String,
    /// Output parameters.
    pub params: Pset,
}

impl OutputModule {
    /// Creates an output module of the given type.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            params: Pset::new(),
        }
    }

    /// Creates an output module writing to `file_name` with a dataset
    /// descriptor (`dataTier` + `filterName`).
    pub fn with_dataset(
        type_name: impl Into<String>,
        file_name: &str,
        data_tier: &str,
        filter_name: &str,
    ) -> Self {
        let mut module = Self::new(type_name);
        let mut dataset = Pset::new();
        dataset.insert("dataTier", Parameter::untracked(data_tier));
        dataset.insert("filterName", Parameter::untracked(filter_name));
        module.params.insert("dataset", Parameter::untracked(dataset));
        module
            .params
            .insert("fileName", Parameter::untracked(file_name));
        module
    }
}

/// Service declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Framework type implementing the service.
    pub type_name: String,
    /// Service parameters.
    pub params: Pset,
}

impl Service {
    /// Creates a service of the given type.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            params: Pset::new(),
        }
    }

    /// Creates a `MessageLogger` service writing to `cout` at the given
    /// threshold, with debug output restricted to `debug_modules`.
    pub fn message_logger(threshold: &str, debug_modules: Vec<&str>) -> Self {
        let mut cout = Pset::new();
        cout.insert("threshold", Parameter::untracked(threshold));
        let mut service = Self::new("MessageLogger");
        service
            .params
            .insert("destinations", Parameter::untracked(vec!["cout"]));
        service.params.insert("cout", Parameter::untracked(cout));
        service
            .params
            .insert("debugModules", Parameter::untracked(debug_modules));
        service
    }
}
