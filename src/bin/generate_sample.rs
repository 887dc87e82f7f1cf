//! Writes a synthetic `project_list.xlsx` for trying out the dashboard:
//! two leading title rows, a header row, then ~140 project records with the
//! usual mess found in real lists (whitespace padding, stray flag values,
//! codeless rows).

use rust_xlsxwriter::{Workbook, XlsxError};

const SECTORS: [&str; 6] = [
    "Roads",
    "Water",
    "Energy",
    "Health",
    "Education",
    "Drainage",
];

const LOCATIONS: [&str; 12] = [
    "Belize City",
    "Belmopan",
    "San Ignacio",
    "Orange Walk",
    "Corozal",
    "Dangriga",
    "Punta Gorda",
    "San Pedro",
    "Benque Viejo",
    "Ladyville",
    "Placencia",
    "Hopkins",
];

const PROPOSERS: [&str; 5] = [
    "Ministry of Works",
    "Ministry of Health",
    "Ministry of Education",
    "Town Council",
    "Village Council",
];

const HEADERS: [&str; 12] = [
    "Code",
    "Location",
    "Intervention",
    "Sector",
    "Proposer",
    "Cost <4M",
    "Cost <2M",
    "Cost <1M",
    "Cost <0.5M",
    "In Scope",
    "Rationale",
    "Comment",
];

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

    /// Uniform float in [0, 1).
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a>(&mut self, options: &[&'a str]) -> &'a str {
        options[(self.next_u64() % options.len() as u64) as usize]
    }
}

fn flag(condition: bool) -> &'static str {
    if condition {
        "Y"
    } else {
        "N"
    }
}

fn main() -> Result<(), XlsxError> {
    let mut rng = SimpleRng::new(42);
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // Two leading non-data rows, as project lists in the wild carry.
    worksheet.write_string(0, 0, "Ministry of Infrastructure — National Project List")?;
    worksheet.write_string(1, 0, "Working copy, subject to revision")?;
    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_string(2, col as u16, *header)?;
    }

    let mut row: u32 = 3;
    for i in 0..140 {
        // A few codeless rows that the loader should drop.
        if rng.unit() < 0.04 {
            worksheet.write_string(row, 2, "placeholder — code pending")?;
            row += 1;
            continue;
        }

        let sector = rng.pick(&SECTORS);
        let location = rng.pick(&LOCATIONS);
        let cost_millions = 0.1 + rng.unit() * 7.9;

        worksheet.write_string(row, 0, format!("P-{:03}", i + 1))?;
        if rng.unit() > 0.05 {
            worksheet.write_string(row, 1, location)?;
        }
        worksheet.write_string(row, 2, format!("{sector} upgrade, {location}"))?;
        worksheet.write_string(row, 3, sector)?;
        worksheet.write_string(row, 4, rng.pick(&PROPOSERS))?;
        worksheet.write_string(row, 5, flag(cost_millions < 4.0))?;
        worksheet.write_string(row, 6, flag(cost_millions < 2.0))?;
        worksheet.write_string(row, 7, flag(cost_millions < 1.0))?;
        worksheet.write_string(row, 8, flag(cost_millions < 0.5))?;

        // In-scope flag with occasional whitespace padding and the odd
        // unresolved entry.
        let scope = match rng.unit() {
            u if u < 0.62 => "Y",
            u if u < 0.67 => " Y ",
            u if u < 0.95 => "N",
            _ => "TBD",
        };
        worksheet.write_string(row, 9, scope)?;

        if rng.unit() < 0.4 {
            worksheet.write_string(row, 10, "Carried over from previous cycle")?;
        }
        row += 1;
    }

    workbook.save("project_list.xlsx")?;
    println!("Wrote project_list.xlsx ({} rows)", row - 3);
    Ok(())
}
