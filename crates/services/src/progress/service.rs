use std::sync::Arc;

use itp_core::access::AccessContext;
use itp_core::model::Module;
use itp_core::Clock;

use super::view::{ModuleProgressView, ProgressReportView, UnitListItem};
use crate::api::LmsApi;
use crate::session_context::SessionContext;

/// Unit-access and progress facade for the member pages.
///
/// Owns the time source and the API seam. Fetch failures degrade to the
/// absent-breakdown fallback of the resolver, so these calls are infallible:
/// a transport error must never lock a learner out of material.
#[derive(Clone)]
pub struct ProgressService {
    clock: Clock,
    api: Arc<dyn LmsApi>,
}

impl ProgressService {
    #[must_use]
    pub fn new(clock: Clock, api: Arc<dyn LmsApi>) -> Self {
        Self { clock, api }
    }

    /// Resolve the full unit list of `module` for the current session.
    pub async fn load_module_progress(
        &self,
        ctx: &SessionContext,
        module: Module,
    ) -> ModuleProgressView {
        let access = self.load_access_context(ctx).await;
        let units = module
            .units()
            .map(|unit| UnitListItem::from_access(unit, access.resolve(module, unit)))
            .collect();

        ModuleProgressView {
            module,
            title: module.title(),
            units,
            summary: access.module_summary(module),
            fetched_at: self.clock.now(),
        }
    }

    /// Summaries for every module, for the progress report page.
    pub async fn load_progress_report(&self, ctx: &SessionContext) -> ProgressReportView {
        let access = self.load_access_context(ctx).await;
        ProgressReportView {
            modules: Module::ALL
                .into_iter()
                .map(|module| access.module_summary(module))
                .collect(),
            fetched_at: self.clock.now(),
        }
    }

    /// Fetch the breakdown once for this view; non-learner roles skip the
    /// fetch since resolution ignores the breakdown for them.
    async fn load_access_context(&self, ctx: &SessionContext) -> AccessContext {
        if !ctx.role().is_learner() {
            return AccessContext::new(ctx.role(), None);
        }

        let breakdown = match self.api.fetch_access_breakdown(ctx.token()).await {
            Ok(breakdown) => Some(breakdown),
            Err(err) => {
                tracing::warn!(error = %err, "unit-access fetch failed, falling back to open access");
                None
            }
        };

        AccessContext::new(ctx.role(), breakdown)
    }
}
