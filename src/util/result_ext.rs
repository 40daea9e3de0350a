pub trait ResultExt<T, E> {
	/// Logs a failure of the operation described by `what` and carries on without the value.
	fn ok_or_log(self, what: &str) -> Option<T>
	where
		E: std::fmt::Display;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
	fn ok_or_log(self, what: &str) -> Option<T>
	where
		E: std::fmt::Display,
	{
		self
			.inspect_err(|err| tracing::error!(error = %err, "{what} failed"))
			.ok()
	}
}
