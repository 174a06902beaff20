//! A short tour of the nestpoly API.
//!
//! Run with `cargo run --example algebra_tour`.

use nestpoly::prelude::*;

fn main() {
    let x = Poly::<i64>::var(0);
    let y = Poly::<i64>::var(1);
    let algebraic = RenderConfig::algebraic();

    // (x + y)^3
    let p = x.add(&y).pow(3);
    println!("p          = {}", p.display_with(algebraic));
    println!("bracketed  = {p}");
    println!("deg p      = {}", p.degree());
    println!("deg_y p    = {}", p.degree_by(1));

    // (x + 1)(x - 1)
    let q = x.add(&Poly::one()).mul(&x.sub(&Poly::one()));
    println!("q          = {}", q.display_with(algebraic));
    println!("q(3)       = {}", q.at(3));

    // p(x, y) with x -> x*y, y -> 2
    let composed = p.compose(&[x.mul(&y), Poly::from_coeff(2)]);
    println!("p(xy, 2)   = {}", composed.display_with(algebraic));

    println!("p - p = 0  : {}", p.sub(&p).is_zero());
}
