//! Compilation orchestrator.

use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};
use logwire_core::{
    CompiledTemplate, Fragment, Naming, ServiceManifest, SubscriptionFilterSetting,
};
use logwire_provider::{Identity, LogDelivery};
use tracing::info;

use crate::builder::FragmentBuilder;
use crate::error::CompileResult;
use crate::limits::LimitChecker;
use crate::resolve::{DEFAULT_MAX_PAGES, LogGroupResolver};

/// Orchestrator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Cap on pages followed per log source resolution.
    pub max_pages: usize,
}

impl CompilerConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Set the page cap for log source resolution.
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary of one compile run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CompilerOutput {
    /// Events compiled into fragments.
    pub compiled: usize,
    /// Valid events skipped because their stage does not match.
    pub skipped: usize,
    /// Events without a subscription filter, ignored.
    pub ignored: usize,
}

/// Compiles every subscription filter event of a deployment into the
/// shared template.
pub struct Compiler {
    log_delivery: Arc<dyn LogDelivery>,
    identity: Arc<dyn Identity>,
    naming: Arc<dyn Naming>,
    config: CompilerConfig,
}

impl Compiler {
    /// Create a compiler over the provider collaborators.
    #[must_use]
    pub fn new(
        log_delivery: Arc<dyn LogDelivery>,
        identity: Arc<dyn Identity>,
        naming: Arc<dyn Naming>,
    ) -> Self {
        Self {
            log_delivery,
            identity,
            naming,
            config: CompilerConfig::new(),
        }
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: CompilerConfig) -> Self {
        self.config = config;
        self
    }

    /// Compile all subscription filter events into `template`.
    ///
    /// Every event is validated synchronously first, so a malformed
    /// setting aborts the run before any remote call is made; fail-fast
    /// is the explicit policy. Valid events whose stage does not match
    /// the active stage are skipped. The remaining pipelines run
    /// concurrently on the cooperative runtime and their fragment sets
    /// merge into `template` as they complete; the merge is commutative
    /// because logical IDs are distinct per event.
    ///
    /// # Errors
    ///
    /// The first pipeline failure is returned and in-flight siblings are
    /// dropped. Fragments already merged from completed siblings remain
    /// in the template; the caller decides whether to keep the partial
    /// output.
    pub async fn compile(
        &self,
        manifest: &ServiceManifest,
        template: &mut CompiledTemplate,
    ) -> CompileResult<CompilerOutput> {
        let stage = self.naming.stage();
        let mut output = CompilerOutput::default();
        let mut jobs: Vec<(String, SubscriptionFilterSetting)> = Vec::new();

        for (function, config) in &manifest.functions {
            for event in &config.events {
                match SubscriptionFilterSetting::from_event(event.subscription_filter.as_ref())? {
                    None => output.ignored += 1,
                    Some(setting) if setting.stage != stage => {
                        info!(
                            function,
                            log_group = %setting.log_group_name,
                            event_stage = %setting.stage,
                            active_stage = %stage,
                            "skipping subscription filter, stage does not match"
                        );
                        output.skipped += 1;
                    }
                    Some(setting) => jobs.push((function.clone(), setting)),
                }
            }
        }

        let mut pipelines: FuturesUnordered<_> = jobs
            .iter()
            .map(|(function, setting)| self.compile_event(function, setting))
            .collect();

        while let Some(result) = pipelines.next().await {
            template.merge(result?);
            output.compiled += 1;
        }

        Ok(output)
    }

    /// Run the pipeline for one stage-matching event: limit check, then
    /// identifier resolution, then fragment construction.
    #[tracing::instrument(skip(self, setting), fields(log_group = %setting.log_group_name))]
    async fn compile_event(
        &self,
        function: &str,
        setting: &SubscriptionFilterSetting,
    ) -> CompileResult<Vec<Fragment>> {
        info!("compiling subscription filter");

        let checker = LimitChecker::new(
            self.log_delivery.as_ref(),
            self.identity.as_ref(),
            self.naming.as_ref(),
        );
        let function_runtime_id = checker.check(&setting.log_group_name, function).await?;

        let resolver =
            LogGroupResolver::new(self.log_delivery.as_ref()).with_max_pages(self.config.max_pages);
        let log_group_id = resolver.resolve(&setting.log_group_name).await?;

        let builder = FragmentBuilder::new(self.naming.as_ref());
        Ok(builder.build(setting, function, &function_runtime_id, &log_group_id))
    }
}
