//! Config loading: document in, registered loggers out
//!
//! Filters are processed in document order. A sink that can't be built
//! stops the load at that filter, but loggers registered from earlier
//! filters stay registered; registration is not transactional.

use super::document::{ConfigDocument, FilterRecord};
use super::format::resolve_formatter;
use super::sink::{SinkBuilder, SinkSpec, SinkType, StdSinkBuilder};
use super::source::{DocumentSource, FsSource};
use crate::core::{ConfigLogger, LoggerError, LoggerRegistry, Result};
use std::path::Path;
use tracing::{debug, warn};

/// Identifier reported in errors for documents passed as strings
const INLINE_IDENTIFIER: &str = "<inline>";

/// Outcome of a successful load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of loggers handed to the registry
    pub registered: usize,
    /// Tags of enabled filters skipped for naming an unknown sink type
    pub skipped: Vec<String>,
}

/// Turns config documents into registered [`ConfigLogger`]s
///
/// # Example
///
/// ```no_run
/// use timber::config::ConfigLoader;
/// use timber::LoggerSet;
///
/// let mut loggers = LoggerSet::new();
/// let report = ConfigLoader::new().load("/etc/app/timber.json", &mut loggers)?;
/// println!("{} loggers configured", report.registered);
/// # Ok::<(), timber::LoggerError>(())
/// ```
pub struct ConfigLoader<S = FsSource, B = StdSinkBuilder> {
    source: S,
    sinks: B,
}

impl ConfigLoader {
    /// Loader reading from the filesystem and building the crate's appenders
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(FsSource, StdSinkBuilder)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DocumentSource, B: SinkBuilder> ConfigLoader<S, B> {
    #[must_use]
    pub fn with_parts(source: S, sinks: B) -> Self {
        Self { source, sinks }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn sinks(&self) -> &B {
        &self.sinks
    }

    /// Read the document named by `identifier` and register its loggers.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `identifier` is empty; nothing is opened
    /// - `ConfigRead` / `ConfigParse` if the document can't be read; nothing
    ///   is registered
    /// - `InvalidConfiguration` or the sink constructor's own error for the
    ///   first filter whose sink can't be built
    pub fn load<R: LoggerRegistry + ?Sized>(
        &self,
        identifier: &str,
        registry: &mut R,
    ) -> Result<LoadReport> {
        if identifier.is_empty() {
            return Err(LoggerError::invalid_argument("empty config identifier"));
        }

        let document = self.read_document(identifier)?;
        self.load_document(document, registry)
    }

    /// Parse `json` and register its loggers
    pub fn load_str<R: LoggerRegistry + ?Sized>(
        &self,
        json: &str,
        registry: &mut R,
    ) -> Result<LoadReport> {
        let document = json
            .parse::<ConfigDocument>()
            .map_err(|e| LoggerError::config_parse(INLINE_IDENTIFIER, e))?;
        self.load_document(document, registry)
    }

    fn read_document(&self, identifier: &str) -> Result<ConfigDocument> {
        let reader = self
            .source
            .open(identifier)
            .map_err(|e| LoggerError::config_read(identifier, e))?;

        // The reader is consumed here and dropped whether or not parsing succeeds
        ConfigDocument::from_reader(reader).map_err(|e| LoggerError::config_parse(identifier, e))
    }

    /// Register a logger for every enabled filter of an already parsed document
    pub fn load_document<R: LoggerRegistry + ?Sized>(
        &self,
        document: ConfigDocument,
        registry: &mut R,
    ) -> Result<LoadReport> {
        let mut report = LoadReport::default();

        for filter in document.filters {
            if !filter.enabled {
                continue;
            }

            match self.assemble(&filter)? {
                Some(logger) => {
                    debug!(
                        tag = %filter.tag,
                        sink = logger.sink_name(),
                        threshold = %logger.level,
                        "registering configured logger"
                    );
                    registry.register(logger);
                    report.registered += 1;
                }
                None => {
                    warn!(
                        tag = %filter.tag,
                        sink_type = %filter.sink_type,
                        "unrecognized filter type in config, skipping"
                    );
                    report.skipped.push(filter.tag);
                }
            }
        }

        debug!(
            registered = report.registered,
            skipped = report.skipped.len(),
            "config load complete"
        );
        Ok(report)
    }

    /// Build the logger for one filter; `None` if its sink type is unknown
    fn assemble(&self, filter: &FilterRecord) -> Result<Option<ConfigLogger>> {
        let level = filter.resolved_level();
        let formatter = resolve_formatter(filter);
        let granulars = filter.granular_levels();

        let Some(sink_type) = SinkType::from_name(&filter.sink_type) else {
            return Ok(None);
        };
        let sink = SinkSpec::resolve(sink_type, &filter.properties)?.build(&self.sinks)?;

        Ok(Some(ConfigLogger::new(level, formatter, granulars, sink)))
    }
}

/// Load a JSON config file with the default loader
///
/// # Errors
///
/// `InvalidArgument` if `path` is not valid UTF-8, otherwise as
/// [`ConfigLoader::load`].
pub fn load_json_config<R: LoggerRegistry + ?Sized>(
    path: impl AsRef<Path>,
    registry: &mut R,
) -> Result<LoadReport> {
    let path = path.as_ref();
    let identifier = path.to_str().ok_or_else(|| {
        LoggerError::invalid_argument(format!(
            "config path is not valid UTF-8: {}",
            path.display()
        ))
    })?;
    ConfigLoader::new().load(identifier, registry)
}
