use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Instant;

use datafaker_core::Catalog;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::errors::GenerationError;
use crate::generators::{
    NumberGenerator, RegexGenerator, SequenceGenerator, check_components, roll_components,
};
use crate::locales::LocaleKey;
use crate::model::{
    Batch, FieldReport, FieldSource, FieldSpec, FileTarget, GenerateOptions, GenerationReport,
    GenerationRequest, OutputReport,
};
use crate::output::write_batch_file;
use crate::producer::{FakeProducer, ValueProducer};
use crate::store::is_valid_identifier;
use crate::value::GeneratedValue;

const REPORT_FILE: &str = "generation_report.json";

/// Rows plus the counters gathered while building them.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledBatch {
    pub batch: Batch,
    pub report: GenerationReport,
}

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub run_dir: PathBuf,
    pub output_path: PathBuf,
    pub batch: Batch,
    pub report: GenerationReport,
}

/// Entry point for generating batches from a request.
pub struct GenerationEngine {
    options: GenerateOptions,
    producer: Option<Box<dyn ValueProducer>>,
    catalog: Catalog,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self {
            options,
            producer: None,
            catalog: Catalog::builtin(),
        }
    }

    /// Replace the `fake`-backed producer. The request locale is still
    /// validated but no longer selects the producer.
    pub fn with_producer(mut self, producer: impl ValueProducer + 'static) -> Self {
        self.producer = Some(Box::new(producer));
        self
    }

    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    /// Validate the request and build its rows in memory.
    pub fn assemble(
        &self,
        request: &GenerationRequest,
    ) -> Result<AssembledBatch, GenerationError> {
        let locale = resolve_locale(request.locale.as_deref())?;
        let seed = request.seed.unwrap_or(self.options.seed);
        let mut report = GenerationReport::new(request.table.clone(), seed, locale.as_str());
        let batch = self.assemble_into(request, locale, seed, &mut report)?;
        Ok(AssembledBatch { batch, report })
    }

    /// Assemble, then write `<table><suffix>` and the report into a fresh
    /// run directory under `out_dir`.
    pub fn run(
        &self,
        request: &GenerationRequest,
        target: &FileTarget,
    ) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        validate_shape(request)?;
        let suffix = target.resolve_suffix()?;
        let run_id = uuid::Uuid::new_v4().to_string();
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%SZ").to_string();
        let run_dir = self
            .options
            .out_dir
            .join(format!("{timestamp}__run_{run_id}"));
        std::fs::create_dir_all(&run_dir)?;

        let seed = request.seed.unwrap_or(self.options.seed);
        let locale_label = request
            .locale
            .clone()
            .unwrap_or_else(|| LocaleKey::default().to_string());
        let mut report = GenerationReport::new(request.table.clone(), seed, locale_label);
        report.run_id = Some(run_id.clone());

        info!(
            run_id = %run_id,
            table = %request.table,
            rows = request.count,
            seed,
            format = %target.format,
            "generation started"
        );

        let output_path = run_dir.join(format!("{}{suffix}", request.table));
        let outcome = resolve_locale(request.locale.as_deref()).and_then(|locale| {
            let batch = self.assemble_into(request, locale, seed, &mut report)?;
            let bytes_written = write_batch_file(&output_path, &batch, target.format)?;
            report.output = Some(OutputReport {
                path: output_path.clone(),
                format: target.format,
                suffix: suffix.clone(),
                bytes_written,
            });
            Ok(batch)
        });
        report.duration_ms = start.elapsed().as_millis() as u64;

        let report_path = run_dir.join(REPORT_FILE);
        let write_report = |report: &GenerationReport| -> Result<(), GenerationError> {
            std::fs::write(&report_path, serde_json::to_vec_pretty(report)?)?;
            Ok(())
        };

        match outcome {
            Ok(batch) => {
                write_report(&report)?;
                info!(
                    run_id = %run_id,
                    rows_generated = report.rows_generated,
                    retries = report.retries_total,
                    duration_ms = report.duration_ms,
                    path = %output_path.display(),
                    "generation completed"
                );
                Ok(GenerationResult {
                    run_dir,
                    output_path,
                    batch,
                    report,
                })
            }
            Err(err) => {
                report.error = Some(err.to_string());
                write_report(&report)?;
                warn!(run_id = %run_id, error = %err, "generation failed");
                Err(err)
            }
        }
    }

    fn assemble_into(
        &self,
        request: &GenerationRequest,
        locale: LocaleKey,
        seed: u64,
        report: &mut GenerationReport,
    ) -> Result<Batch, GenerationError> {
        validate_shape(request)?;
        let fallback;
        let producer: &dyn ValueProducer = match &self.producer {
            Some(producer) => producer.as_ref(),
            None => {
                fallback = FakeProducer::new(locale);
                &fallback
            }
        };

        let mut fields = request
            .fields
            .iter()
            .map(|spec| FieldState::prepare(spec, request, seed, &self.catalog, producer))
            .collect::<Result<Vec<_>, _>>()?;

        report.rows_requested = request.count;
        let columns = request.fields.iter().map(|field| field.name.clone()).collect();
        let mut batch = Batch::new(request.table.clone(), columns);
        let rows = usize::try_from(request.count).map_err(|_| {
            GenerationError::InvalidRequest(format!("row count {} is too large", request.count))
        })?;
        batch.rows.try_reserve(rows).map_err(|_| {
            GenerationError::InvalidRequest(format!("row count {} is too large", request.count))
        })?;

        for _ in 0..rows {
            let mut row = Vec::with_capacity(fields.len());
            for field in &mut fields {
                row.push(field.next_value(producer, self.options.max_unique_retries)?);
            }
            batch.rows.push(row);
        }

        report.rows_generated = batch.len() as u64;
        for field in fields {
            if let FieldSource::Descriptor { name } = &field.spec.source {
                *report.descriptor_usage.entry(name.clone()).or_insert(0) += field.produced;
            }
            report.retries_total += field.report.retries;
            report.fields.push(field.report);
        }

        debug!(
            table = %batch.table,
            rows = batch.len(),
            columns = batch.columns.len(),
            seed,
            "batch assembled"
        );
        Ok(batch)
    }
}

impl Default for GenerationEngine {
    fn default() -> Self {
        Self::new(GenerateOptions::default())
    }
}

fn resolve_locale(locale: Option<&str>) -> Result<LocaleKey, GenerationError> {
    match locale {
        None => Ok(LocaleKey::default()),
        Some(value) => LocaleKey::parse(value).ok_or_else(|| {
            GenerationError::InvalidRequest(format!("unsupported locale '{value}'"))
        }),
    }
}

fn validate_shape(request: &GenerationRequest) -> Result<(), GenerationError> {
    if request.table.trim().is_empty() {
        return Err(GenerationError::InvalidRequest(
            "table name must not be empty".to_string(),
        ));
    }
    // The table name becomes the output file name inside the run directory.
    if !is_valid_identifier(&request.table) {
        return Err(GenerationError::InvalidRequest(format!(
            "invalid table name '{}'",
            request.table
        )));
    }
    if request.fields.is_empty() {
        return Err(GenerationError::InvalidRequest(format!(
            "table '{}' needs at least one field",
            request.table
        )));
    }
    let mut names = HashSet::new();
    for field in &request.fields {
        if field.name.trim().is_empty() {
            return Err(GenerationError::InvalidRequest(
                "field name must not be empty".to_string(),
            ));
        }
        if !names.insert(field.name.as_str()) {
            return Err(GenerationError::InvalidRequest(format!(
                "duplicate field '{}'",
                field.name
            )));
        }
    }
    Ok(())
}

enum FieldPlan {
    Descriptor(String),
    Number(NumberGenerator),
    Sequence(SequenceGenerator),
    Regex(RegexGenerator),
}

struct FieldState<'a> {
    spec: &'a FieldSpec,
    plan: FieldPlan,
    rng: ChaCha8Rng,
    seen: HashSet<String>,
    produced: u64,
    report: FieldReport,
}

impl<'a> FieldState<'a> {
    fn prepare(
        spec: &'a FieldSpec,
        request: &GenerationRequest,
        seed: u64,
        catalog: &Catalog,
        producer: &dyn ValueProducer,
    ) -> Result<Self, GenerationError> {
        check_components(spec.default.as_ref(), spec.null.as_ref())?;
        let plan = match &spec.source {
            FieldSource::Descriptor { name } => {
                catalog.find_by_name(name)?;
                if !producer.supports(name) {
                    return Err(GenerationError::Unsupported(format!(
                        "field '{}' uses descriptor '{name}' which has no producer",
                        spec.name
                    )));
                }
                FieldPlan::Descriptor(name.clone())
            }
            FieldSource::Number {
                start,
                end,
                decimal_places,
            } => {
                let generator = NumberGenerator::new(*start, *end, *decimal_places)?;
                if spec.unique
                    && let Some(distinct) = generator.distinct_values()
                    && distinct < u128::from(request.count)
                {
                    return Err(GenerationError::InvalidRequest(format!(
                        "field '{}' is unique but its range holds only {distinct} values",
                        spec.name
                    )));
                }
                FieldPlan::Number(generator)
            }
            FieldSource::Sequence {
                start,
                step,
                min,
                max,
                cycle,
            } => {
                let sequence = SequenceGenerator::new(*start, *step, *min, *max, *cycle);
                sequence.check(request.count)?;
                FieldPlan::Sequence(sequence)
            }
            FieldSource::Regex {
                pattern,
                max_repeat,
            } => FieldPlan::Regex(RegexGenerator::new(pattern, *max_repeat)?),
        };

        let stream = hash_seed(seed, &format!("{}.{}", request.table, spec.name));
        Ok(Self {
            spec,
            plan,
            rng: ChaCha8Rng::seed_from_u64(stream),
            seen: HashSet::new(),
            produced: 0,
            report: FieldReport {
                name: spec.name.clone(),
                source: spec.source.kind().to_string(),
                ..FieldReport::default()
            },
        })
    }

    fn next_value(
        &mut self,
        producer: &dyn ValueProducer,
        max_retries: u32,
    ) -> Result<GeneratedValue, GenerationError> {
        let component = roll_components(
            self.spec.default.as_ref(),
            self.spec.null.as_ref(),
            &mut self.rng,
        );
        if let Some(value) = component {
            if value.is_null() {
                self.report.nulls += 1;
            } else {
                self.report.defaults += 1;
            }
            return Ok(value);
        }

        let mut retries = 0_u32;
        loop {
            let value = self.sample(producer)?;
            if !self.spec.unique || self.seen.insert(value.unique_key()) {
                self.produced += 1;
                return Ok(value);
            }
            retries += 1;
            self.report.retries += 1;
            if retries > max_retries {
                return Err(GenerationError::InvalidRequest(format!(
                    "field '{}' found no unique value after {max_retries} retries",
                    self.spec.name
                )));
            }
        }
    }

    fn sample(&mut self, producer: &dyn ValueProducer) -> Result<GeneratedValue, GenerationError> {
        match &mut self.plan {
            FieldPlan::Descriptor(name) => producer.generate(name, &mut self.rng),
            FieldPlan::Number(generator) => Ok(generator.sample(&mut self.rng)),
            FieldPlan::Sequence(sequence) => {
                sequence.next().map(GeneratedValue::Int).ok_or_else(|| {
                    GenerationError::InvalidRequest(format!(
                        "sequence for field '{}' is exhausted",
                        self.spec.name
                    ))
                })
            }
            FieldPlan::Regex(generator) => {
                Ok(GeneratedValue::Text(generator.sample(&mut self.rng)))
            }
        }
    }
}

fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}
