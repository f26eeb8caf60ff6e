//! Error-scope helpers.
//!
//! wgpu reports validation and allocation failures asynchronously. Wrapping
//! a call in a scope turns that report into a value instead of the default
//! uncaptured-error panic.

/// Runs `f` inside a validation scope and returns the captured error, if any.
pub(crate) fn capture_validation<T>(
    device: &wgpu::Device,
    f: impl FnOnce(&wgpu::Device) -> T,
) -> (T, Option<wgpu::Error>) {
    let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);
    let value = f(device);
    let error = pollster::block_on(scope.pop());
    (value, error)
}

/// Errors captured by [`capture_allocation`].
pub(crate) struct AllocationErrors {
    pub out_of_memory: Option<wgpu::Error>,
    pub validation: Option<wgpu::Error>,
}

/// Runs `f` inside nested out-of-memory and validation scopes.
pub(crate) fn capture_allocation<T>(
    device: &wgpu::Device,
    f: impl FnOnce(&wgpu::Device) -> T,
) -> (T, AllocationErrors) {
    let oom_scope = device.push_error_scope(wgpu::ErrorFilter::OutOfMemory);
    let validation_scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

    let value = f(device);

    // Scopes pop in reverse push order.
    let validation = pollster::block_on(validation_scope.pop());
    let out_of_memory = pollster::block_on(oom_scope.pop());

    (
        value,
        AllocationErrors {
            out_of_memory,
            validation,
        },
    )
}
