/// Returns the Fibonacci number at position `n` using plain double recursion.
///
/// Positions at or below zero yield 0. Sums wrap around on `i32` overflow.
pub fn fibonacci(n: i32) -> i32 {
    match n {
        i32::MIN..=0 => 0,
        1 => 1,
        _ => fibonacci(n - 1).wrapping_add(fibonacci(n - 2)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub value: i32,
    /// Number of invocations, the outermost one included.
    pub calls: u64,
}

/// Same recursion as [`fibonacci`], also counting how many calls it took.
pub fn fibonacci_counted(n: i32) -> Evaluation {
    match n {
        i32::MIN..=0 => Evaluation { value: 0, calls: 1 },
        1 => Evaluation { value: 1, calls: 1 },
        _ => {
            let a = fibonacci_counted(n - 1);
            let b = fibonacci_counted(n - 2);
            Evaluation {
                value: a.value.wrapping_add(b.value),
                calls: a.calls + b.calls + 1,
            }
        }
    }
}
