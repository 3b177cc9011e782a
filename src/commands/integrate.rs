use anyhow::{anyhow, bail, Result};

use crate::config::DemoConfig;
use crate::core::numerics::calculus;

fn parse_coeffs(spec: &str) -> Result<(f64, f64, f64)> {
    let parts = spec
        .split(',')
        .map(|v| {
            let v = v.trim();
            v.parse::<f64>()
                .map_err(|_| anyhow!("not a number: '{}'", v))
        })
        .collect::<Result<Vec<f64>>>()?;
    if parts.len() != 3 {
        bail!("--coeffs expects exactly three values: a,b,c");
    }
    Ok((parts[0], parts[1], parts[2]))
}

pub fn main(
    func: &str,
    a: f64,
    b: f64,
    samples: Option<usize>,
    coeffs: Option<&str>,
    cfg: &DemoConfig,
) -> Result<()> {
    let n = samples.unwrap_or(cfg.samples);
    let value = match func {
        "x2" => calculus::integrate(|x| x * x, a, b, n)?,
        "sin" => calculus::integrate(f64::sin, a, b, n)?,
        "poly" => {
            let spec = coeffs.ok_or_else(|| anyhow!("poly requires --coeffs a,b,c"))?;
            let (ca, cb, cc) = parse_coeffs(spec)?;
            calculus::integrate(|x| ca * x * x + cb * x + cc, a, b, n)?
        }
        other => bail!("unknown integrand '{}' (expected x2, sin, or poly)", other),
    };
    println!(
        "int_{}^{} {} dx ~= {:.prec$}",
        a,
        b,
        func,
        value,
        prec = cfg.precision
    );
    Ok(())
}
