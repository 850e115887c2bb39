//! Executable wrapper configuration.
//!
//! [`ExecutableConfig`] is the full descriptor handed to the native builder:
//! where the jar and the output executable live, how the launcher behaves,
//! and the version-info resource fields. Construct it through
//! [`ConfigBuilder`], which validates required inputs and runs the
//! defaults-resolution pass over the version info.

mod jre;
mod messages;
mod single_instance;
mod splash;

pub use jre::JreSettings;
pub use messages::MessagesSettings;
pub use single_instance::SingleInstanceSettings;
pub use splash::SplashSettings;

use crate::error::{LaunchwrapError, Result};
use crate::project::ProjectFacts;
use crate::versioninfo::{fill_out_by_defaults, VersionInfo};
use std::path::PathBuf;

/// Kind of executable header to produce.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeaderType {
    /// Windowed application, launched with javaw, no console.
    #[default]
    Gui,
    /// Console application, launched with java.
    Console,
}

/// Process priority of the wrapped application.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProcessPriority {
    /// Normal priority (default).
    #[default]
    Normal,
    /// Idle priority.
    Idle,
    /// High priority.
    High,
}

/// Complete configuration for wrapping a jar into a native executable.
///
/// Built via [`ConfigBuilder`]; by the time a value of this type exists its
/// version info has been fully resolved.
#[derive(Clone, Debug)]
pub struct ExecutableConfig {
    /// Kind of executable header.
    pub header_type: HeaderType,

    /// Path of the executable to produce.
    pub outfile: PathBuf,

    /// Path of the jar to wrap.
    ///
    /// None when the executable is a launcher only and the jar ships
    /// alongside it.
    pub jar: Option<PathBuf>,

    /// Keep the jar outside the executable instead of embedding it.
    pub dont_wrap_jar: bool,

    /// Title of error popups; also used as the mutex hint on some systems.
    pub err_title: Option<String>,

    /// URL offered to the user when no runtime is found.
    pub download_url: Option<String>,

    /// Support URL shown in error popups.
    pub support_url: Option<String>,

    /// Constant command-line arguments prepended to the user's.
    pub cmd_line: Option<String>,

    /// Working directory at startup, relative to the executable.
    pub chdir: Option<String>,

    /// Process priority of the launched JVM.
    pub priority: ProcessPriority,

    /// Keep the launcher alive until the application exits.
    pub stay_alive: bool,

    /// Restart the application after a crash.
    pub restart_on_crash: bool,

    /// Path to the .ico file stamped into the executable.
    pub icon: Option<PathBuf>,

    /// Path to a custom manifest embedded into the executable.
    pub manifest: Option<PathBuf>,

    /// JRE search and heap settings.
    pub jre: JreSettings,

    /// Splash screen settings.
    pub splash: Option<SplashSettings>,

    /// Single-instance settings.
    pub single_instance: Option<SingleInstanceSettings>,

    /// Localized message overrides.
    pub messages: MessagesSettings,

    /// Fully resolved version-info resource fields.
    pub version_info: VersionInfo,
}

/// Builder for [`ExecutableConfig`].
///
/// # Examples
///
/// ```
/// use launchwrap::{ConfigBuilder, ProjectFacts};
///
/// # fn example() -> launchwrap::Result<()> {
/// let config = ConfigBuilder::new()
///     .outfile("target/invoice-mailer.exe")
///     .jar("target/invoice-mailer.jar")
///     .project_facts(ProjectFacts {
///         version: Some("1.4.2".into()),
///         name: Some("Invoice Mailer".into()),
///         ..Default::default()
///     })
///     .build()?;
/// assert_eq!(config.version_info.file_version.as_deref(), Some("1.4.2.0"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    header_type: HeaderType,
    outfile: Option<PathBuf>,
    jar: Option<PathBuf>,
    dont_wrap_jar: bool,
    err_title: Option<String>,
    download_url: Option<String>,
    support_url: Option<String>,
    cmd_line: Option<String>,
    chdir: Option<String>,
    priority: ProcessPriority,
    stay_alive: bool,
    restart_on_crash: bool,
    icon: Option<PathBuf>,
    manifest: Option<PathBuf>,
    jre: JreSettings,
    splash: Option<SplashSettings>,
    single_instance: Option<SingleInstanceSettings>,
    messages: MessagesSettings,
    version_info: VersionInfo,
    project_facts: Option<ProjectFacts>,
}

impl ConfigBuilder {
    /// Creates a new config builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the kind of executable header.
    ///
    /// Default: [`HeaderType::Gui`]
    pub fn header_type(mut self, header_type: HeaderType) -> Self {
        self.header_type = header_type;
        self
    }

    /// Sets the path of the executable to produce.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn outfile(mut self, outfile: impl Into<PathBuf>) -> Self {
        self.outfile = Some(outfile.into());
        self
    }

    /// Sets the path of the jar to wrap.
    pub fn jar(mut self, jar: impl Into<PathBuf>) -> Self {
        self.jar = Some(jar.into());
        self
    }

    /// Keeps the jar outside the executable instead of embedding it.
    ///
    /// Default: false
    pub fn dont_wrap_jar(mut self, dont_wrap_jar: bool) -> Self {
        self.dont_wrap_jar = dont_wrap_jar;
        self
    }

    /// Sets the title of error popups.
    pub fn err_title(mut self, err_title: impl Into<String>) -> Self {
        self.err_title = Some(err_title.into());
        self
    }

    /// Sets the URL offered when no runtime is found.
    pub fn download_url(mut self, download_url: impl Into<String>) -> Self {
        self.download_url = Some(download_url.into());
        self
    }

    /// Sets the support URL shown in error popups.
    pub fn support_url(mut self, support_url: impl Into<String>) -> Self {
        self.support_url = Some(support_url.into());
        self
    }

    /// Sets constant command-line arguments.
    pub fn cmd_line(mut self, cmd_line: impl Into<String>) -> Self {
        self.cmd_line = Some(cmd_line.into());
        self
    }

    /// Sets the working directory at startup.
    pub fn chdir(mut self, chdir: impl Into<String>) -> Self {
        self.chdir = Some(chdir.into());
        self
    }

    /// Sets the process priority.
    ///
    /// Default: [`ProcessPriority::Normal`]
    pub fn priority(mut self, priority: ProcessPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Keeps the launcher alive until the application exits.
    ///
    /// Default: false
    pub fn stay_alive(mut self, stay_alive: bool) -> Self {
        self.stay_alive = stay_alive;
        self
    }

    /// Restarts the application after a crash.
    ///
    /// Default: false
    pub fn restart_on_crash(mut self, restart_on_crash: bool) -> Self {
        self.restart_on_crash = restart_on_crash;
        self
    }

    /// Sets the icon stamped into the executable.
    pub fn icon(mut self, icon: impl Into<PathBuf>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets a custom manifest to embed.
    pub fn manifest(mut self, manifest: impl Into<PathBuf>) -> Self {
        self.manifest = Some(manifest.into());
        self
    }

    /// Sets JRE search and heap settings.
    ///
    /// Default: Empty [`JreSettings`]
    pub fn jre(mut self, jre: JreSettings) -> Self {
        self.jre = jre;
        self
    }

    /// Sets splash screen settings.
    ///
    /// Default: None (no splash screen)
    pub fn splash(mut self, splash: SplashSettings) -> Self {
        self.splash = Some(splash);
        self
    }

    /// Sets single-instance settings.
    ///
    /// Default: None (multiple instances allowed)
    pub fn single_instance(mut self, single_instance: SingleInstanceSettings) -> Self {
        self.single_instance = Some(single_instance);
        self
    }

    /// Sets localized message overrides.
    ///
    /// Default: Empty [`MessagesSettings`]
    pub fn messages(mut self, messages: MessagesSettings) -> Self {
        self.messages = messages;
        self
    }

    /// Sets explicit version-info fields.
    ///
    /// Blank fields are filled from project facts during [`build`].
    ///
    /// Default: Empty [`VersionInfo`]
    ///
    /// [`build`]: Self::build
    pub fn version_info(mut self, version_info: VersionInfo) -> Self {
        self.version_info = version_info;
        self
    }

    /// Sets the project facts used to fill blank version-info fields.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn project_facts(mut self, project_facts: ProjectFacts) -> Self {
        self.project_facts = Some(project_facts);
        self
    }

    /// Builds the configuration, resolving version-info defaults.
    ///
    /// Each dummy substitution the resolver had to make is logged as one
    /// warning.
    ///
    /// # Errors
    ///
    /// Returns [`LaunchwrapError::MissingRequiredInput`] when `outfile` or
    /// `project_facts` was never set, and
    /// [`LaunchwrapError::InvalidVersionFormat`] when the project version
    /// fails the version grammar.
    pub fn build(self) -> Result<ExecutableConfig> {
        let outfile = self
            .outfile
            .ok_or(LaunchwrapError::MissingRequiredInput { input: "outfile" })?;

        let resolution = fill_out_by_defaults(
            &self.version_info,
            self.project_facts.as_ref(),
            Some(&outfile),
        )?;
        resolution.warn_substitutions();

        log::debug!(
            "resolved version info for {}: {:?}",
            outfile.display(),
            resolution.version_info
        );

        Ok(ExecutableConfig {
            header_type: self.header_type,
            outfile,
            jar: self.jar,
            dont_wrap_jar: self.dont_wrap_jar,
            err_title: self.err_title,
            download_url: self.download_url,
            support_url: self.support_url,
            cmd_line: self.cmd_line,
            chdir: self.chdir,
            priority: self.priority,
            stay_alive: self.stay_alive,
            restart_on_crash: self.restart_on_crash,
            icon: self.icon,
            manifest: self.manifest,
            jre: self.jre,
            splash: self.splash,
            single_instance: self.single_instance,
            messages: self.messages,
            version_info: resolution.version_info,
        })
    }
}
