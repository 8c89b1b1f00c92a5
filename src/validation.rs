//! Input validation for scheduling runs.
//!
//! Checks geometric consistency of a run before scheduling. Detects:
//! - Inverted disk bounds (`start > end`)
//! - Head outside the disk bounds
//! - Requests outside the disk bounds
//! - Empty request sets (opt-in)
//!
//! Bounds are only checked for policies that travel to the disk edges
//! (SCAN, C-SCAN); other policies never consult them.

use serde::{Deserialize, Serialize};

use crate::algorithms::{Algorithm, SweepContext};
use crate::models::{Cylinder, DiskBounds};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// `disk_start` is greater than `disk_end`.
    InvertedBounds,
    /// The starting head lies outside the disk.
    HeadOutOfBounds,
    /// A request lies outside the disk.
    RequestOutOfBounds,
    /// No requests were supplied.
    EmptyRequests,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the inputs of a single run.
///
/// Checks, for bounds-aware policies only:
/// 1. Bounds are ordered
/// 2. The head lies within the bounds
/// 3. Every request lies within the bounds
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_run(
    requests: &[Cylinder],
    head: Cylinder,
    algorithm: Algorithm,
    context: &SweepContext,
) -> ValidationResult {
    if !algorithm.uses_bounds() {
        return Ok(());
    }
    validate_geometry(requests, head, &context.bounds)
}

/// Validates head and requests against the disk bounds regardless of policy.
pub fn validate_geometry(
    requests: &[Cylinder],
    head: Cylinder,
    bounds: &DiskBounds,
) -> ValidationResult {
    let mut errors = Vec::new();

    if !bounds.is_ordered() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvertedBounds,
            format!(
                "Disk start {} is greater than disk end {}",
                bounds.start, bounds.end
            ),
        ));
        // Range checks are meaningless against an empty range.
        return Err(errors);
    }

    if !bounds.contains(head) {
        errors.push(ValidationError::new(
            ValidationErrorKind::HeadOutOfBounds,
            format!(
                "Head {} lies outside disk [{}, {}]",
                head, bounds.start, bounds.end
            ),
        ));
    }

    for &request in requests {
        if !bounds.contains(request) {
            errors.push(ValidationError::new(
                ValidationErrorKind::RequestOutOfBounds,
                format!(
                    "Request {} lies outside disk [{}, {}]",
                    request, bounds.start, bounds.end
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Requires at least one request.
pub fn validate_requests_present(requests: &[Cylinder]) -> ValidationResult {
    if requests.is_empty() {
        Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyRequests,
            "Please enter at least one valid request",
        )])
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUESTS: [Cylinder; 8] = [98, 183, 37, 122, 14, 124, 65, 67];

    #[test]
    fn test_valid_input() {
        let ctx = SweepContext::new();
        for algorithm in Algorithm::ALL {
            assert!(validate_run(&REQUESTS, 50, algorithm, &ctx).is_ok());
        }
    }

    #[test]
    fn test_inverted_bounds() {
        let ctx = SweepContext::new().with_bounds(DiskBounds::new(199, 0));
        let errors = validate_run(&REQUESTS, 50, Algorithm::Scan, &ctx).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvertedBounds);
    }

    #[test]
    fn test_head_out_of_bounds() {
        let ctx = SweepContext::new();
        let errors = validate_run(&REQUESTS, 250, Algorithm::CScan, &ctx).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::HeadOutOfBounds));
    }

    #[test]
    fn test_requests_out_of_bounds() {
        let ctx = SweepContext::new();
        let errors = validate_run(&[10, 300, -1], 50, Algorithm::Scan, &ctx).unwrap_err();
        let out: Vec<_> = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::RequestOutOfBounds)
            .collect();
        assert_eq!(out.len(), 2);
        assert!(out[0].message.contains("300"));
    }

    #[test]
    fn test_bounds_ignored_for_boundless_policies() {
        let ctx = SweepContext::new().with_bounds(DiskBounds::new(199, 0));
        assert!(validate_run(&[500], -20, Algorithm::Look, &ctx).is_ok());
        assert!(validate_run(&[500], -20, Algorithm::CLook, &ctx).is_ok());
        assert!(validate_run(&[500], -20, Algorithm::Sstf, &ctx).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let errors = validate_geometry(&[400, 500], 300, &DiskBounds::default()).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_requests_present() {
        assert!(validate_requests_present(&[1]).is_ok());
        let errors = validate_requests_present(&[]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyRequests);
    }
}
