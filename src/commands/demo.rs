//! Demonstration run: sample matrices through every operation, then the
//! two reference integrals.

use anyhow::Result;
use colored::Colorize;

use crate::config::DemoConfig;
use crate::core::numerics::matrix::Matrix;
use crate::core::numerics::{arithmetic, calculus, elimination, linear_algebra};

fn banner(title: &str) {
    println!(
        "{}",
        format!("================== {} ==================", title)
            .bright_magenta()
            .bold()
    );
}

fn section(title: &str) {
    println!("{}", format!("------- {} -------", title).bright_cyan());
}

pub fn main(cfg: &DemoConfig) -> Result<()> {
    let a = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])?;
    let b = Matrix::from_rows(vec![vec![10.0, 20.0, 30.0], vec![40.0, 50.0, 60.0]])?;
    let d = Matrix::from_rows(vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 1.0]])?;
    let q = Matrix::from_rows(vec![
        vec![2.0, 1.0, 1.0],
        vec![1.0, 3.0, 2.0],
        vec![1.0, 0.0, 0.0],
    ])?;
    let r = Matrix::from_rows(vec![
        vec![1.0, 2.0, 3.0, 4.0],
        vec![0.0, 1.0, 4.0, 7.0],
        vec![0.0, 0.0, 1.0, 3.0],
        vec![0.0, 0.0, 0.0, 2.0],
    ])?;

    banner("Matrices");
    println!();

    section("matrix A");
    print!("{}", a);
    println!();

    section("matrix B");
    print!("{}", b);
    println!();

    section("matrix D");
    print!("{}", d);
    println!();

    section("addition");
    println!("A + B:");
    print!("{}", arithmetic::add(&a, &b)?);
    println!();

    section("subtraction");
    println!("A - B:");
    print!("{}", arithmetic::sub(&a, &b)?);
    println!();

    section("multiplication");
    println!("A x D:");
    print!("{}", linear_algebra::multiply(&a, &d)?);
    println!();

    let (s1, s2, s3) = (5.0, 2.0, 3.0);

    section("scalar addition");
    println!("A + {:.2}:", s1);
    print!("{}", arithmetic::add_scalar(&a, s1)?);
    println!();

    section("scalar subtraction");
    println!("A - {:.2}:", s2);
    print!("{}", arithmetic::sub_scalar(&a, s2)?);
    println!();

    section("scalar multiplication");
    println!("A * {:.2}:", s3);
    print!("{}", arithmetic::mul_scalar(&a, s3)?);
    println!();

    section("transpose of A");
    print!("{}", linear_algebra::transpose(&a)?);
    println!();

    section("determinant 3x3");
    print!("{}", q);
    println!("det(Q) = {:.2}", elimination::determinant(&q)?);
    println!();

    section("determinant 4x4");
    print!("{}", r);
    println!("det(R) = {:.2}", elimination::determinant(&r)?);
    println!();

    section("inverse of Q");
    println!("Q:");
    print!("{}", q);
    match elimination::inverse(&q) {
        Ok(q_inv) => {
            println!("\nQ^-1:");
            print!("{}", q_inv);
            println!("\nQ * Q^-1:");
            print!("{}", linear_algebra::multiply(&q, &q_inv)?);
        }
        Err(e) => println!("{} {}", "warn:".yellow().bold(), e),
    }
    println!();

    section("random 3x3");
    let m = Matrix::random(3, 3, -5.0, 5.0)?;
    print!("{}", m);
    println!("det(M) = {:.2}", elimination::determinant(&m)?);
    match elimination::inverse(&m) {
        Ok(m_inv) => {
            println!("M * M^-1:");
            print!("{}", linear_algebra::multiply(&m, &m_inv)?);
        }
        Err(e) => println!("{} {}", "warn:".yellow().bold(), e),
    }
    println!();

    banner("Integrals");
    println!();

    let n = cfg.samples;
    let poly = (1.0, 0.0, 0.0); // x^2
    let r1 = calculus::integrate(|x| poly.0 * x * x + poly.1 * x + poly.2, 0.0, 1.0, n)?;
    println!(
        "int_0^1 x^2 dx       ~= {:.prec$}",
        r1,
        prec = cfg.precision
    );

    let r2 = calculus::integrate(f64::sin, 0.0, std::f64::consts::PI, n)?;
    println!(
        "int_0^pi sin(x) dx   ~= {:.prec$}",
        r2,
        prec = cfg.precision
    );

    Ok(())
}
