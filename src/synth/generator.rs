use serde::Serialize;

use super::ids::IdFormat;
use super::pool::Pools;
use super::sampler::Sampler;
use crate::error::{DrugbankError, Result};
use crate::tree::{Document, Namespace, XmlNode};

/// How many leading units feed the pools.
pub const POOL_SOURCE_COUNT: usize = 100;

/// Total unit count produced when none is configured.
pub const DEFAULT_TARGET_TOTAL: usize = 200;

/// Summary of one generation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub original_count: usize,
    pub synthesized_count: usize,
    pub pooled_tags: usize,
    pub first_id: Option<String>,
    pub last_id: Option<String>,
}

/// An inflated document together with its report.
#[derive(Clone, Debug)]
pub struct Generated {
    pub document: Document,
    pub report: GenerationReport,
}

/// Inflates a corpus to a target unit count by recombining pooled sub-trees.
#[derive(Clone, Debug)]
pub struct Generator {
    ns: Namespace,
    target_total: usize,
    pool_size: usize,
    id_format: IdFormat,
    unit_tag: String,
    id_tag: String,
}

impl Generator {
    pub fn new(ns: Namespace, target_total: usize) -> Self {
        Self {
            ns,
            target_total,
            pool_size: POOL_SOURCE_COUNT,
            id_format: IdFormat::default(),
            unit_tag: "drug".to_string(),
            id_tag: "drugbank-id".to_string(),
        }
    }

    pub fn with_id_format(mut self, id_format: IdFormat) -> Self {
        self.id_format = id_format;
        self
    }

    pub fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = pool_size;
        self
    }

    pub fn target_total(&self) -> usize {
        self.target_total
    }

    /// Build a new document holding every original unit followed by enough
    /// synthesized units to reach the target total. The source is not
    /// modified.
    pub fn generate<S: Sampler + ?Sized>(
        &self,
        document: &Document,
        sampler: &mut S,
    ) -> Result<Generated> {
        let root = document.root();
        let units: Vec<&XmlNode> = root
            .children
            .iter()
            .filter(|c| self.ns.matches(&c.name, &self.unit_tag))
            .collect();
        let original_count = units.len();

        if self.target_total < original_count {
            return Err(DrugbankError::validation(format!(
                "target total {} is below the existing unit count {}",
                self.target_total, original_count
            )));
        }
        if original_count < self.pool_size {
            tracing::warn!(
                "Only {original_count} source units available; pools use all of them"
            );
        }

        let pools = Pools::build(units.iter().copied(), &self.ns, &self.id_tag, self.pool_size);
        let template = units.first().copied();
        let synthesized_count = self.target_total - original_count;
        let first_number = if synthesized_count == 0 {
            0
        } else {
            self.id_format
                .next_after(units.iter().copied(), &self.ns, &self.id_tag)?
        };

        let mut output = root.clone();
        output.children.reserve(synthesized_count);
        let mut first_id = None;
        let mut last_id = None;

        for offset in 0..synthesized_count {
            let number = u64::try_from(offset)
                .ok()
                .and_then(|offset| first_number.checked_add(offset))
                .ok_or_else(|| {
                    DrugbankError::validation(format!(
                        "{synthesized_count} new identifiers after {} exceed the identifier range",
                        self.id_format.format(first_number)
                    ))
                })?;
            let id = self.id_format.format(number);
            let unit = self.synthesize_unit(template, &id, &pools, sampler);
            first_id.get_or_insert_with(|| id.clone());
            last_id = Some(id);
            output.children.push(unit);
        }

        let report = GenerationReport {
            original_count,
            synthesized_count,
            pooled_tags: pools.len(),
            first_id,
            last_id,
        };
        tracing::info!(
            "Generated {} units ({} original, {} pooled tags)",
            report.synthesized_count,
            report.original_count,
            report.pooled_tags
        );

        Ok(Generated {
            document: Document::new(output),
            report,
        })
    }

    /// One new unit: the template's tag and attributes, a primary identifier
    /// child, then one sampled copy from every pool.
    pub fn synthesize_unit<S: Sampler + ?Sized>(
        &self,
        template: Option<&XmlNode>,
        id: &str,
        pools: &Pools,
        sampler: &mut S,
    ) -> XmlNode {
        let name = template
            .map(|t| t.name.clone())
            .unwrap_or_else(|| self.ns.qualify(self.unit_tag.as_str()));
        let mut unit = XmlNode::new(name);
        if let Some(template) = template {
            unit.attributes = template.attributes.clone();
            unit.prefixes = template.prefixes.clone();
        }
        for (prefix, uri) in pools.prefixes() {
            unit.prefixes
                .entry(prefix.clone())
                .or_insert_with(|| uri.clone());
        }

        unit.children.push(
            XmlNode::new(self.ns.qualify(self.id_tag.as_str()))
                .with_attribute("primary", "true")
                .with_text(id),
        );
        for (_, entries) in pools.iter() {
            if entries.is_empty() {
                continue;
            }
            let index = sampler.pick(entries.len()).min(entries.len() - 1);
            unit.children.push(entries[index].clone());
        }
        unit
    }
}
