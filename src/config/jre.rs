//! JRE search and runtime settings.

/// Where the wrapped executable looks for a Java runtime and how it sizes
/// the JVM heap.
///
/// If only `path` is set, the executable errors when no runtime is found
/// there. With `min_version` set as well, the path is tried first and the
/// local system is searched afterwards.
#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JreSettings {
    /// Path to a bundled runtime, relative to the executable.
    ///
    /// Default: None (search the system)
    pub path: Option<String>,

    /// Minimum acceptable runtime version, in x.x.x[_xx] format.
    ///
    /// Default: None
    pub min_version: Option<String>,

    /// Maximum acceptable runtime version, in x.x.x[_xx] format.
    ///
    /// Only meaningful together with `min_version`.
    ///
    /// Default: None
    pub max_version: Option<String>,

    /// Whether private JREs bundled with SDKs may be used.
    ///
    /// Default: None (tool default)
    pub jdk_preference: Option<String>,

    /// Initial heap size in MB, like the -Xms flag.
    ///
    /// Default: None (JVM default)
    pub initial_heap_size: Option<u32>,

    /// Initial heap size in percent of free memory.
    ///
    /// Default: None
    pub initial_heap_percent: Option<u32>,

    /// Maximum heap size in MB, like the -Xmx flag.
    ///
    /// Default: None (JVM default)
    pub max_heap_size: Option<u32>,

    /// Maximum heap size in percent of free memory.
    ///
    /// Default: None
    pub max_heap_percent: Option<u32>,

    /// Arbitrary options passed to the java/javaw program.
    ///
    /// Example: `-Dlaunch4j.exedir="%EXEDIR%"`
    ///
    /// Default: Empty
    pub opts: Vec<String>,
}
