//! The process tree and its assembly semantics.

use fsim_core::errors::{ConfError, ErrorInfo};
use fsim_core::pset::{Parameter, Pset, Value};
use fsim_core::InputTag;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::modules::{EdProducer, OutputModule, Service, Source};
use crate::schedule::PathSpec;
use crate::seeds::RandomSeedService;

/// A fully assembled process: one source, labelled module families, paths,
/// and an optional explicit schedule.
///
/// Assembly follows the evaluation model of the configuration language:
/// statements execute in order and later assignments overwrite earlier ones.
/// No semantic validation happens here; consistency checks live in the lint
/// crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Process {
    /// Process name, e.g. `DEMO`.
    pub name: String,
    /// Era labels modifying the configuration, kept as opaque strings.
    #[serde(default)]
    pub eras: Vec<String>,
    /// Maximum number of events to process; -1 means unlimited.
    #[serde(default)]
    pub max_events: Option<i32>,
    /// Event source.
    #[serde(default)]
    pub source: Option<Source>,
    /// Random-number service table.
    #[serde(default)]
    pub random_seeds: RandomSeedService,
    /// Other services by label.
    #[serde(default)]
    pub services: IndexMap<String, Service>,
    /// Producers by label.
    #[serde(default)]
    pub producers: IndexMap<String, EdProducer>,
    /// Output modules by label.
    #[serde(default)]
    pub output_modules: IndexMap<String, OutputModule>,
    /// Parameter overlays for modules brought in by external configuration
    /// bundles. Loading declares the label; later assignments accumulate in
    /// the overlay.
    #[serde(default)]
    pub externals: IndexMap<String, Pset>,
    /// Paths and end paths by name, in declaration order.
    #[serde(default)]
    pub paths: IndexMap<String, PathSpec>,
    /// Explicit schedule: ordered path names. When absent, all paths run in
    /// declaration order.
    #[serde(default)]
    pub schedule: Option<Vec<String>>,
}

fn unknown_module(label: &str) -> ConfError {
    ConfError::Process(
        ErrorInfo::new("proc-module", "assignment targets an undefined module")
            .with_context("label", label),
    )
}

impl Process {
    /// Creates an empty process with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            eras: Vec::new(),
            max_events: None,
            source: None,
            random_seeds: RandomSeedService::new(),
            services: IndexMap::new(),
            producers: IndexMap::new(),
            output_modules: IndexMap::new(),
            externals: IndexMap::new(),
            paths: IndexMap::new(),
            schedule: None,
        }
    }

    /// Adds an era label.
    pub fn add_era(&mut self, era: impl Into<String>) -> &mut Self {
        self.eras.push(era.into());
        self
    }

    /// Sets the event source, replacing any previous one.
    pub fn set_source(&mut self, source: Source) -> &mut Self {
        self.source = Some(source);
        self
    }

    /// Inserts or replaces a service.
    pub fn set_service(&mut self, label: impl Into<String>, service: Service) -> &mut Self {
        self.services.insert(label.into(), service);
        self
    }

    /// Inserts or replaces a producer.
    pub fn set_producer(&mut self, label: impl Into<String>, producer: EdProducer) -> &mut Self {
        self.producers.insert(label.into(), producer);
        self
    }

    /// Inserts or replaces an output module.
    pub fn set_output_module(
        &mut self,
        label: impl Into<String>,
        module: OutputModule,
    ) -> &mut Self {
        self.output_modules.insert(label.into(), module);
        self
    }

    /// Declares a module brought in by an external configuration bundle.
    /// Re-declaring keeps the existing overlay.
    pub fn declare_external(&mut self, label: impl Into<String>) -> &mut Self {
        self.externals.entry(label.into()).or_default();
        self
    }

    /// Inserts or replaces a path.
    pub fn set_path(&mut self, name: impl Into<String>, path: PathSpec) -> &mut Self {
        self.paths.insert(name.into(), path);
        self
    }

    /// Sets the explicit schedule.
    pub fn set_schedule(&mut self, path_names: Vec<&str>) -> &mut Self {
        self.schedule = Some(path_names.into_iter().map(str::to_string).collect());
        self
    }

    /// Whether `label` names an instantiated module of any family.
    pub fn is_instantiated(&self, label: &str) -> bool {
        self.producers.contains_key(label)
            || self.output_modules.contains_key(label)
            || self.services.contains_key(label)
            || self.externals.contains_key(label)
    }

    fn module_params_mut(&mut self, label: &str) -> Option<(&mut Pset, bool)> {
        if let Some(producer) = self.producers.get_mut(label) {
            return Some((&mut producer.params, false));
        }
        if let Some(output) = self.output_modules.get_mut(label) {
            return Some((&mut output.params, false));
        }
        if let Some(service) = self.services.get_mut(label) {
            return Some((&mut service.params, false));
        }
        if let Some(overlay) = self.externals.get_mut(label) {
            return Some((overlay, true));
        }
        None
    }

    /// Returns the parameter set of the module named `label`, if any.
    pub fn module_params(&self, label: &str) -> Option<&Pset> {
        self.producers
            .get(label)
            .map(|producer| &producer.params)
            .or_else(|| self.output_modules.get(label).map(|output| &output.params))
            .or_else(|| self.services.get(label).map(|service| &service.params))
            .or_else(|| self.externals.get(label))
    }

    /// Overwrites the parameter addressed by `dot_path`
    /// (`module.param` or `module.nested.param`).
    ///
    /// For regular modules every intermediate set must already exist; for
    /// external overlays intermediates are created on demand, since the
    /// externally defined tree is not materialized here.
    pub fn assign(&mut self, dot_path: &str, param: Parameter) -> Result<(), ConfError> {
        let (label, segments, last) = split_dot_path(dot_path)?;
        let (params, is_overlay) = self
            .module_params_mut(label)
            .ok_or_else(|| unknown_module(label))?;
        let mut current = params;
        for segment in segments {
            if is_overlay && !current.exists(segment) {
                current.set(segment, Pset::new());
            }
            current = current.get_pset_mut(segment)?;
        }
        current.insert(last, param);
        Ok(())
    }

    /// Appends to the list parameter addressed by `dot_path`. Strings append
    /// to `vstring` parameters, tags to `vinput-tag` parameters.
    pub fn append(&mut self, dot_path: &str, item: Value) -> Result<(), ConfError> {
        let (label, segments, last) = split_dot_path(dot_path)?;
        let (params, _) = self
            .module_params_mut(label)
            .ok_or_else(|| unknown_module(label))?;
        let mut current = params;
        for segment in segments {
            current = current.get_pset_mut(segment)?;
        }
        match item {
            Value::Str(s) => current.append_vstring(last, s),
            Value::Tag(tag) => current.append_vtag(last, tag),
            other => Err(ConfError::Process(
                ErrorInfo::new("proc-append", "append expects a string or an input tag")
                    .with_context("path", dot_path)
                    .with_context("found", other.type_name()),
            )),
        }
    }

    /// Resolves the schedule into the ordered list of module labels.
    ///
    /// Fails when the schedule names an undefined path or a path names an
    /// undefined module. Without an explicit schedule all paths run in
    /// declaration order.
    pub fn resolve_schedule(&self) -> Result<Vec<String>, ConfError> {
        let names: Vec<&String> = match &self.schedule {
            Some(names) => {
                for name in names {
                    if !self.paths.contains_key(name) {
                        return Err(ConfError::Process(
                            ErrorInfo::new("proc-path", "schedule references undefined path")
                                .with_context("path", name),
                        ));
                    }
                }
                names.iter().collect()
            }
            None => self.paths.keys().collect(),
        };
        let mut modules = Vec::new();
        for name in names {
            let path = &self.paths[name.as_str()];
            for label in &path.modules {
                if !self.is_instantiated(label) {
                    return Err(ConfError::Process(
                        ErrorInfo::new("proc-module-ref", "path references undefined module")
                            .with_context("path", name.as_str())
                            .with_context("label", label),
                    ));
                }
                modules.push(label.clone());
            }
        }
        Ok(modules)
    }

    /// All input tags reachable from the process tree, with the dotted
    /// location they were found at.
    pub fn collect_input_tags(&self) -> Vec<(String, InputTag)> {
        let mut tags = Vec::new();
        if let Some(source) = &self.source {
            collect_tags(&source.params, "source", &mut tags);
        }
        for (label, producer) in &self.producers {
            collect_tags(&producer.params, label, &mut tags);
        }
        for (label, output) in &self.output_modules {
            collect_tags(&output.params, label, &mut tags);
        }
        for (label, service) in &self.services {
            collect_tags(&service.params, label, &mut tags);
        }
        for (label, overlay) in &self.externals {
            collect_tags(overlay, label, &mut tags);
        }
        tags
    }
}

fn split_dot_path(dot_path: &str) -> Result<(&str, Vec<&str>, &str), ConfError> {
    let parts: Vec<&str> = dot_path.split('.').collect();
    if parts.len() < 2 || parts.iter().any(|part| part.is_empty()) {
        return Err(ConfError::Process(
            ErrorInfo::new("proc-dot-path", "expected module.param[.param...]")
                .with_context("path", dot_path),
        ));
    }
    let label = parts[0];
    let last = parts[parts.len() - 1];
    Ok((label, parts[1..parts.len() - 1].to_vec(), last))
}

fn collect_tags(pset: &Pset, location: &str, out: &mut Vec<(String, InputTag)>) {
    for (name, param) in pset.iter() {
        let here = format!("{location}.{name}");
        match &param.value {
            Value::Tag(tag) => out.push((here, tag.clone())),
            Value::VTag(tags) => {
                for tag in tags {
                    out.push((here.clone(), tag.clone()));
                }
            }
            Value::Pset(inner) => collect_tags(inner, &here, out),
            Value::VPset(inners) => {
                for inner in inners {
                    collect_tags(inner, &here, out);
                }
            }
            _ => {}
        }
    }
}
