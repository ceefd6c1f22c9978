//! Fuzz target for f64 interval arithmetic
//!
//! Checks that every operation encloses the pointwise result at the bounds
//! and at the center of its operands.

#![no_main]

use arbitrary::Arbitrary;
use exacta_math::interval::{BoundType, DoubleInterval};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum IntervalOp {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Debug, Arbitrary)]
struct Operand {
    lower: i32,
    width: u16,
    scale: u8,
}

impl Operand {
    fn interval(&self) -> DoubleInterval {
        let scale = f64::from(self.scale) + 1.0;
        let lower = f64::from(self.lower) / scale;
        DoubleInterval::new(
            lower,
            BoundType::Weak,
            lower + f64::from(self.width) / scale,
            BoundType::Weak,
        )
    }
}

#[derive(Debug, Arbitrary)]
struct Input {
    lhs: Operand,
    rhs: Operand,
    op: IntervalOp,
}

fuzz_target!(|input: Input| {
    let a = input.lhs.interval();
    let b = input.rhs.interval();
    let points = |i: &DoubleInterval| [*i.lower(), *i.upper(), i.center()];

    let result = match input.op {
        IntervalOp::Add => &a + &b,
        IntervalOp::Sub => &a - &b,
        IntervalOp::Mul => &a * &b,
        IntervalOp::Div => match a.div(&b) {
            Ok(q) => q,
            Err(_) => {
                assert!(b.contains(&0.0));
                return;
            }
        },
    };

    for x in points(&a) {
        for y in points(&b) {
            let value = match input.op {
                IntervalOp::Add => x + y,
                IntervalOp::Sub => x - y,
                IntervalOp::Mul => x * y,
                IntervalOp::Div => x / y,
            };
            assert!(result.contains(&value), "{x} {:?} {y} = {value} not in {result}", input.op);
        }
    }
});
