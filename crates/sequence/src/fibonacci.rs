/// The n-th Fibonacci number, with `F(0) = 0` and `F(1) = 1`.
///
/// Plain recursion with no memo table, so cost grows exponentially in `n`.
/// Any `n <= 1`, negative values included, is returned unchanged.
pub fn fibonacci(n: i64) -> i64 {
    if n <= 1 {
        n
    } else {
        fibonacci(n - 1) + fibonacci(n - 2)
    }
}
