use std::fs::File;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{BooleanArray, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

const N_LISTINGS: usize = 1900;

const DISTRICTS: &[(&str, f64)] = &[
    ("Casco Antiguo", 1.35),
    ("Triana", 1.25),
    ("Los Remedios", 1.20),
    ("Nervión", 1.10),
    ("Macarena", 0.90),
    ("Bellavista", 0.80),
    ("Cerro-Amate", 0.70),
];

/// One row as it appears in the source spreadsheet: area and rooms as text.
#[derive(Debug, Serialize)]
struct SampleListing {
    price: i64,
    meters: String,
    rooms: String,
    district: String,
    terrace: bool,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn generate_listing(rng: &mut SimpleRng) -> SampleListing {
    let rooms = 1 + rng.below(5) as u32;
    let meters = rng.gauss(35.0 + 25.0 * rooms as f64, 12.0).round().max(25.0) as u32;
    let terrace = rng.next_f64() < 0.8;
    let (district, factor) = DISTRICTS[rng.below(DISTRICTS.len())];

    let per_meter = rng.gauss(2900.0, 350.0) * factor;
    let premium = if terrace { 1.12 } else { 1.0 };
    let price = ((meters as f64 * per_meter * premium) / 500.0).round() as i64 * 500;

    let rooms_text = if rooms == 1 {
        "1 habitación".to_string()
    } else {
        format!("{rooms} habitaciones")
    };

    SampleListing {
        price,
        meters: format!("{meters} m²"),
        rooms: rooms_text,
        district: district.to_string(),
        terrace,
    }
}

fn write_csv(listings: &[SampleListing], path: &str) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {path}"))?;
    for listing in listings {
        writer.serialize(listing).context("writing CSV record")?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(())
}

fn write_json(listings: &[SampleListing], path: &str) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {path}"))?;
    serde_json::to_writer_pretty(file, listings).context("writing JSON")?;
    Ok(())
}

fn write_parquet(listings: &[SampleListing], path: &str) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("price", DataType::Int64, false),
        Field::new("meters", DataType::Utf8, false),
        Field::new("rooms", DataType::Utf8, false),
        Field::new("district", DataType::Utf8, false),
        Field::new("terrace", DataType::Boolean, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(Int64Array::from_iter_values(listings.iter().map(|l| l.price))),
            Arc::new(StringArray::from_iter_values(listings.iter().map(|l| l.meters.as_str()))),
            Arc::new(StringArray::from_iter_values(listings.iter().map(|l| l.rooms.as_str()))),
            Arc::new(StringArray::from_iter_values(listings.iter().map(|l| l.district.as_str()))),
            Arc::new(BooleanArray::from(
                listings.iter().map(|l| l.terrace).collect::<Vec<_>>(),
            )),
        ],
    )
    .context("building record batch")?;

    let file = File::create(path).with_context(|| format!("creating {path}"))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(1900);
    let listings: Vec<SampleListing> = (0..N_LISTINGS).map(|_| generate_listing(&mut rng)).collect();

    write_csv(&listings, "sample_listings.csv")?;
    write_json(&listings, "sample_listings.json")?;
    write_parquet(&listings, "sample_listings.parquet")?;

    println!(
        "Wrote {} simulated listings to sample_listings.{{csv,json,parquet}}",
        listings.len()
    );
    Ok(())
}
