use anyhow::{anyhow, Result};

use crate::core::numerics::elimination;
use crate::core::numerics::matrix::Matrix;

/// Parses a compact matrix literal: rows separated by ';', entries by ','.
/// Example: "2,1,1;1,3,2;1,0,0".
pub fn parse_matrix(spec: &str) -> Result<Matrix> {
    let rows = spec
        .split(';')
        .map(|row| {
            row.split(',')
                .map(|v| {
                    let v = v.trim();
                    v.parse::<f64>()
                        .map_err(|_| anyhow!("not a number: '{}'", v))
                })
                .collect::<Result<Vec<f64>>>()
        })
        .collect::<Result<Vec<Vec<f64>>>>()?;
    Ok(Matrix::from_rows(rows)?)
}

pub fn det(spec: &str) -> Result<()> {
    let m = parse_matrix(spec)?;
    print!("{}", m);
    let d = elimination::determinant(&m)?;
    println!("det = {:.6}", d);
    Ok(())
}

pub fn inv(spec: &str) -> Result<()> {
    let m = parse_matrix(spec)?;
    print!("{}", m);
    let inverse = elimination::inverse(&m)?;
    println!("inverse:");
    print!("{}", inverse);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_matrix() {
        let m = parse_matrix("1,2;3,4").unwrap();
        assert_eq!(m.data, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_parse_matrix_rejects_garbage() {
        assert!(parse_matrix("1,2;3,x").is_err());
        assert!(parse_matrix("1,2;3").is_err());
    }
}
