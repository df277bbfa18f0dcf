use serde::Serialize;

use crate::selector::{DiscoverySelector, ResolvedSelector, SelectorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionStatus {
    Resolved,
    /// Selector kinds the symbol space does not resolve.
    Deferred,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectorReport {
    pub input: String,
    pub kind: SelectorKind,
    pub display: String,
    pub status: ResolutionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SelectorReport {
    /// Resolves `selector` and records the outcome.
    pub fn from_selector(input: impl Into<String>, selector: &DiscoverySelector) -> Self {
        let mut report = SelectorReport {
            input: input.into(),
            kind: selector.kind(),
            display: selector.to_string(),
            status: ResolutionStatus::Deferred,
            symbol: None,
            container_kind: None,
            declared_in: None,
            error: None,
        };

        match selector.resolve() {
            Ok(ResolvedSelector::Container(container)) => {
                report.status = ResolutionStatus::Resolved;
                report.symbol = Some(container.to_string());
                report.container_kind = Some(container.kind().as_str());
            }
            Ok(ResolvedSelector::Member(resolved)) => {
                report.status = ResolutionStatus::Resolved;
                report.symbol = Some(resolved.to_string());
                report.container_kind = Some(resolved.container().kind().as_str());
                let declaring = resolved.member().declaring_container();
                if declaring != resolved.container().name() {
                    report.declared_in = Some(declaring.to_string());
                }
            }
            Ok(ResolvedSelector::Deferred) => {}
            Err(e) => {
                report.status = ResolutionStatus::Failed;
                report.error = Some(e.to_string());
            }
        }
        report
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolutionReport {
    pub symbol_source: String,
    pub containers_loaded: usize,
    pub total_selectors: usize,
    pub resolved: usize,
    pub deferred: usize,
    pub failed: usize,
    pub selectors: Vec<SelectorReport>,
}

impl ResolutionReport {
    pub fn new(symbol_source: impl Into<String>, containers_loaded: usize) -> Self {
        Self {
            symbol_source: symbol_source.into(),
            containers_loaded,
            total_selectors: 0,
            resolved: 0,
            deferred: 0,
            failed: 0,
            selectors: Vec::new(),
        }
    }

    pub fn push(&mut self, report: SelectorReport) {
        match report.status {
            ResolutionStatus::Resolved => self.resolved += 1,
            ResolutionStatus::Deferred => self.deferred += 1,
            ResolutionStatus::Failed => self.failed += 1,
        }
        self.total_selectors += 1;
        self.selectors.push(report);
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
