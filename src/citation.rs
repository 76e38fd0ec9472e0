//! Citation registry: data source identifier → citation text.
//!
//! Each known source maps to a plain formatting function, so adding a source
//! means registering one more entry rather than editing call sites.

use crate::dates::{format_accessed, format_year};
use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;
use log::warn;
use std::collections::HashMap;

/// Line written in place of citations when nothing is selected.
pub const NO_SOURCES_LINE: &str = "# No data sources selected";

/// Prefix of every citation line inside the comment block.
pub const CITATION_INDENT: &str = "#     ";

/// Values a citation template may interpolate.
#[derive(Debug, Clone, PartialEq)]
pub struct CitationContext {
    /// Year of the reference timestamp in the configured zone.
    pub year: String,
    /// "Accessed" date of the reference timestamp, e.g. `May 31, 2024`.
    pub accessed: String,
    /// Display names of the organizations that contributed stations.
    pub providers: Vec<String>,
}

impl CitationContext {
    pub fn new<Z: TimeZone>(reference: &DateTime<Z>, tz: Tz, providers: &[String]) -> Self {
        Self {
            year: format_year(reference, tz),
            accessed: format_accessed(reference, tz),
            providers: providers.to_vec(),
        }
    }
}

pub type CitationFn = fn(&CitationContext) -> String;

/// Lookup table of citation templates keyed by data source identifier.
#[derive(Debug, Clone)]
pub struct CitationRegistry {
    templates: HashMap<&'static str, CitationFn>,
}

impl Default for CitationRegistry {
    fn default() -> Self {
        let mut reg = Self::empty();
        reg.register("USGS", cite_usgs);
        reg.register("NPS", cite_nps);
        reg.register("AKTEMP", cite_aktemp);
        reg
    }
}

impl CitationRegistry {
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Add or replace the template for `source`.
    pub fn register(&mut self, source: &'static str, template: CitationFn) {
        self.templates.insert(source, template);
    }

    /// Citation for one source, or `None` when the source is not registered.
    pub fn cite(&self, source: &str, ctx: &CitationContext) -> Option<String> {
        self.templates.get(source).map(|f| f(ctx))
    }

    /// Citation lines for `sources` in the given order.
    ///
    /// Unregistered sources are skipped with a warning.
    pub fn citations(&self, sources: &[String], ctx: &CitationContext) -> Vec<String> {
        sources
            .iter()
            .filter_map(|source| {
                let line = self.cite(source, ctx);
                if line.is_none() {
                    warn!("no citation registered for data source {source:?}; omitted from export header");
                }
                line
            })
            .collect()
    }

    /// The citation block of the file header, newline-joined.
    pub fn citation_block<Z: TimeZone>(
        &self,
        sources: &[String],
        providers: &[String],
        reference: &DateTime<Z>,
        tz: Tz,
    ) -> String {
        if sources.is_empty() {
            return NO_SOURCES_LINE.to_string();
        }
        let ctx = CitationContext::new(reference, tz, providers);
        self.citations(sources, &ctx).join("\n")
    }
}

/// Join names as prose: `A`, `A and B`, `A, B and C`.
pub fn join_items(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

fn cite_usgs(ctx: &CitationContext) -> String {
    format!(
        "{CITATION_INDENT}U.S. Geological Survey (USGS) ({}). National Water Information System data available on the World Wide Web (USGS Water Data for the Nation). Accessed [{}] at URL [http://waterdata.usgs.gov/nwis/].",
        ctx.year, ctx.accessed
    )
}

fn cite_nps(ctx: &CitationContext) -> String {
    format!(
        "{CITATION_INDENT}National Park Service (NPS) ({}). National Park Service IRMA Portal (Integrated Resource Management Applications) for Continuous Water Data. Accessed [{}] at URL [https://irma.nps.gov/AQWebPortal/].",
        ctx.year, ctx.accessed
    )
}

fn cite_aktemp(ctx: &CitationContext) -> String {
    format!(
        "{CITATION_INDENT}Alaska Water Temperature Database (AKTEMP-DB) ({}). Water temperature data collected by {}. Accessed [{}] at URL [https://aktemp.uaa.alaska.edu/database].",
        ctx.year,
        join_items(&ctx.providers),
        ctx.accessed
    )
}
