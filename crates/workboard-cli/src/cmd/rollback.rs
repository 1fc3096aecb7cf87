/// Rollback would require keeping a move history. Until then the failure is
/// deliberate and tells the caller what to do instead.
pub fn run() -> anyhow::Result<()> {
    anyhow::bail!(
        "rollback is not implemented: move the work package back to its \
         previous lane with 'wb move'"
    )
}
