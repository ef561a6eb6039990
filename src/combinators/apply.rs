//! Two-argument application and function chaining.

/// Invoke `action` with `a` and `b`, for whatever side effect it carries.
///
/// The action runs exactly once; `dispatch` adds no behavior of its own and
/// anything the action panics with propagates unchanged.
///
/// # Example
/// ```
/// use bifold::dispatch;
///
/// let mut seen = Vec::new();
/// dispatch(3, 9, |x, y| seen.push(x + y));
/// assert_eq!(seen, [12]);
/// ```
pub fn dispatch<T, F>(a: T, b: T, action: F)
where
    F: FnOnce(T, T),
{
    action(a, b);
}

/// Apply `f` to `(a, b)`, then feed the intermediate result through `g`.
///
/// `f` runs strictly before `g`, each exactly once. The intermediate type
/// never has to be named at the call site, which keeps "compute, then
/// post-process" chains to a single expression.
///
/// # Example
/// ```
/// use bifold::compose;
///
/// let rendered = compose(
///     2,
///     3,
///     |base: i32, exp| f64::from(base).powi(exp),
///     |r| format!("{r:.1}"),
/// );
/// assert_eq!(rendered, "8.0");
/// ```
pub fn compose<A, B, R1, R2, F, G>(a: A, b: B, f: F, g: G) -> R2
where
    F: FnOnce(A, B) -> R1,
    G: FnOnce(R1) -> R2,
{
    g(f(a, b))
}

/// One-argument counterpart of [`compose`]: `value` through `f`, then `g`.
///
/// # Example
/// ```
/// use bifold::pipe;
///
/// let doubled_len = pipe("My Length please", |s: &str| s.len(), |n| n * 2);
/// assert_eq!(doubled_len, 32);
/// ```
pub fn pipe<A, R1, R2, F, G>(value: A, f: F, g: G) -> R2
where
    F: FnOnce(A) -> R1,
    G: FnOnce(R1) -> R2,
{
    g(f(value))
}
