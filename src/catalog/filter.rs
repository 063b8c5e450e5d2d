//! Validated catalog filter built from raw parameters.

use std::str::FromStr;

use crate::catalog::ValidationError;
use crate::catalog::params::CatalogParams;
use crate::catalog::sort::SortKey;
use crate::domain::product::{FormFactor, MemoryType, ProductStatus};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 24;

/// Inclusive integer range; a missing bound leaves that side open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    pub min: Option<i32>,
    pub max: Option<i32>,
}

impl Bounds {
    pub const fn new(min: Option<i32>, max: Option<i32>) -> Self {
        Self { min, max }
    }

    /// True when neither bound is present.
    pub const fn is_open(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn contains(&self, value: i32) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

/// Catalog filter for one request.
///
/// Empty lists mean "no constraint" for that facet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductFilter {
    pub manufacturers: Vec<String>,
    pub statuses: Vec<ProductStatus>,
    pub memory_types: Vec<MemoryType>,
    pub form_factors: Vec<FormFactor>,
    /// Checkbox capacity list; when non-empty it replaces `capacity`.
    pub capacities: Vec<i32>,
    pub capacity: Bounds,
    pub speed: Bounds,
    pub ecc: Option<bool>,
    pub in_stock_only: bool,
    pub sort: SortKey,
    pub page: usize,
    pub limit: usize,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            manufacturers: Vec::new(),
            statuses: Vec::new(),
            memory_types: Vec::new(),
            form_factors: Vec::new(),
            capacities: Vec::new(),
            capacity: Bounds::default(),
            speed: Bounds::default(),
            ecc: None,
            in_stock_only: false,
            sort: SortKey::default(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Collects invalid field names while parsing so that all of them are reported.
#[derive(Default)]
struct Violations(Vec<&'static str>);

impl Violations {
    fn check<T, E>(&mut self, field: &'static str, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(_) => {
                self.0.push(field);
                None
            }
        }
    }
}

/// Splits a comma-separated value, trimming segments and dropping empty ones.
fn split_csv(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

fn parse_list<T: FromStr>(raw: Option<&str>) -> Result<Vec<T>, T::Err> {
    raw.map_or(Ok(Vec::new()), |raw| split_csv(raw).map(str::parse).collect())
}

/// Integer coercion for `page` and `limit`; an empty or missing value is absent.
fn parse_number<T: FromStr>(raw: Option<&str>) -> Result<Option<T>, T::Err> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => value.parse().map(Some),
        None => Ok(None),
    }
}

/// Value that does not coerce to a finite number.
#[derive(Debug)]
struct NotANumber;

/// Numeric coercion for range bounds: decimals and exponents are accepted,
/// `NaN` and infinities are not. An empty or missing value is absent.
fn parse_finite(raw: Option<&str>) -> Result<Option<f64>, NotANumber> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => match value.parse::<f64>() {
            Ok(number) if number.is_finite() => Ok(Some(number)),
            _ => Err(NotANumber),
        },
        None => Ok(None),
    }
}

/// Lower bound over an integer column: `x >= 16.5` is `x >= 17`.
///
/// `as` saturates, so bounds beyond the `i32` range clamp to its ends.
fn lower_bound(value: Option<f64>) -> Option<i32> {
    value.map(|v| v.ceil() as i32)
}

/// Upper bound over an integer column: `x <= 16.5` is `x <= 16`.
fn upper_bound(value: Option<f64>) -> Option<i32> {
    value.map(|v| v.floor() as i32)
}

/// Only the literals `true` and `false` count; anything else is absent.
fn parse_flag(raw: Option<&str>) -> Option<bool> {
    match raw {
        Some("true") => Some(true),
        Some("false") => Some(false),
        _ => None,
    }
}

fn exact_i32(value: f64) -> Option<i32> {
    let in_range = value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX);
    (in_range && value.fract() == 0.0).then_some(value as i32)
}

/// Checkbox capacities: unparsable and zero entries are dropped. Negative
/// entries are kept and simply match nothing.
///
/// Entries are coerced like range bounds, so `1e1` is 10; a value with a
/// fractional part or outside the `i32` range cannot equal a stored capacity
/// and counts as unparsable.
fn parse_capacities(raw: Option<&str>) -> Vec<i32> {
    raw.map(|raw| {
        split_csv(raw)
            .filter_map(|s| parse_finite(Some(s)).ok().flatten())
            .filter_map(exact_i32)
            .filter(|&cap| cap != 0)
            .collect()
    })
    .unwrap_or_default()
}

impl ProductFilter {
    /// Validates raw parameters, reporting every malformed field at once.
    pub fn parse(params: &CatalogParams) -> Result<Self, ValidationError> {
        let raw = |key: &str| params.get(key);
        let mut violations = Violations::default();

        let manufacturers: Vec<String> = raw("mfr")
            .map(|value| split_csv(&value).map(str::to_string).collect())
            .unwrap_or_default();
        let statuses = violations.check(
            "status",
            parse_list::<ProductStatus>(raw("status").as_deref()),
        );
        let memory_types = violations.check(
            "type",
            parse_list::<MemoryType>(raw("type").as_deref()),
        );
        let form_factors = violations.check(
            "form",
            parse_list::<FormFactor>(raw("form").as_deref()),
        );
        let cap_min = violations.check("capMin", parse_finite(raw("capMin").as_deref()));
        let cap_max = violations.check("capMax", parse_finite(raw("capMax").as_deref()));
        let ecc = parse_flag(raw("ecc").as_deref());
        let speed_min =
            violations.check("speedMin", parse_finite(raw("speedMin").as_deref()));
        let speed_max =
            violations.check("speedMax", parse_finite(raw("speedMax").as_deref()));
        let in_stock_only = parse_flag(raw("inStock").as_deref()) == Some(true);
        let sort = SortKey::resolve(raw("sort").as_deref());
        let page = violations.check("page", parse_number::<i64>(raw("page").as_deref()));
        let limit = violations.check("limit", parse_number::<i64>(raw("limit").as_deref()));
        let capacities = parse_capacities(raw("cap").as_deref());

        if !violations.0.is_empty() {
            return Err(ValidationError {
                fields: violations.0,
            });
        }

        Ok(Self {
            manufacturers,
            statuses: statuses.unwrap_or_default(),
            memory_types: memory_types.unwrap_or_default(),
            form_factors: form_factors.unwrap_or_default(),
            capacities,
            capacity: Bounds::new(lower_bound(cap_min.flatten()), upper_bound(cap_max.flatten())),
            speed: Bounds::new(
                lower_bound(speed_min.flatten()),
                upper_bound(speed_max.flatten()),
            ),
            ecc,
            in_stock_only,
            sort,
            page: positive_or(page.flatten(), DEFAULT_PAGE),
            limit: positive_or(limit.flatten(), DEFAULT_LIMIT),
        })
    }
}

fn positive_or(value: Option<i64>, default: usize) -> usize {
    value
        .filter(|&v| v >= 1)
        .and_then(|v| usize::try_from(v).ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(pairs: &[(&str, &str)]) -> Result<ProductFilter, ValidationError> {
        ProductFilter::parse(&pairs.iter().copied().collect())
    }

    #[test]
    fn empty_params_give_unconstrained_defaults() {
        let filter = parse(&[]).unwrap();
        assert_eq!(filter, ProductFilter::default());
        assert_eq!(filter.page, 1);
        assert_eq!(filter.limit, 24);
    }

    #[test]
    fn csv_lists_drop_empty_segments() {
        let filter = parse(&[("mfr", "Micron,,Samsung,"), ("type", "DDR5, DDR4")]).unwrap();
        assert_eq!(filter.manufacturers, vec!["Micron", "Samsung"]);
        assert_eq!(filter.memory_types, vec![MemoryType::Ddr5, MemoryType::Ddr4]);

        let filter = parse(&[("mfr", ",,"), ("status", "")]).unwrap();
        assert!(filter.manufacturers.is_empty());
        assert!(filter.statuses.is_empty());
    }

    #[test]
    fn out_of_domain_enum_values_are_rejected() {
        let err = parse(&[("status", "Active,Obsolete")]).unwrap_err();
        assert_eq!(err.fields, vec!["status"]);
    }

    #[test]
    fn reports_every_malformed_field() {
        let err = parse(&[
            ("capMin", "abc"),
            ("speedMax", "fast"),
            ("page", "two"),
            ("form", "DIMM"),
        ])
        .unwrap_err();
        assert_eq!(err.fields, vec!["form", "capMin", "speedMax", "page"]);
    }

    #[test]
    fn numeric_fields_are_coerced() {
        let filter = parse(&[("capMin", " 16 "), ("speedMax", "6400"), ("capMax", "")]).unwrap();
        assert_eq!(filter.capacity, Bounds::new(Some(16), None));
        assert_eq!(filter.speed, Bounds::new(None, Some(6400)));
    }

    #[test]
    fn decimal_and_exponent_bounds_round_inward() {
        let filter =
            parse(&[("capMin", "16.5"), ("capMax", "64.9"), ("speedMax", "1e4")]).unwrap();
        assert_eq!(filter.capacity, Bounds::new(Some(17), Some(64)));
        assert_eq!(filter.speed, Bounds::new(None, Some(10000)));
    }

    #[test]
    fn out_of_range_bounds_clamp_to_the_column_domain() {
        let filter = parse(&[("capMax", "99999999999"), ("speedMin", "-1e12")]).unwrap();
        assert_eq!(filter.capacity, Bounds::new(None, Some(i32::MAX)));
        assert_eq!(filter.speed, Bounds::new(Some(i32::MIN), None));
    }

    #[test]
    fn non_finite_bounds_are_rejected() {
        let err = parse(&[("capMin", "NaN"), ("speedMax", "inf")]).unwrap_err();
        assert_eq!(err.fields, vec!["capMin", "speedMax"]);
    }

    #[test]
    fn flags_accept_only_literal_booleans() {
        assert_eq!(parse(&[("ecc", "true")]).unwrap().ecc, Some(true));
        assert_eq!(parse(&[("ecc", "false")]).unwrap().ecc, Some(false));
        assert_eq!(parse(&[("ecc", "maybe")]).unwrap().ecc, None);
        assert_eq!(parse(&[("ecc", "TRUE")]).unwrap().ecc, None);

        assert!(parse(&[("inStock", "true")]).unwrap().in_stock_only);
        assert!(!parse(&[("inStock", "false")]).unwrap().in_stock_only);
        assert!(!parse(&[("inStock", "yes")]).unwrap().in_stock_only);
    }

    #[test]
    fn checkbox_capacities_drop_invalid_entries() {
        let filter = parse(&[("cap", "8,abc,0,16,-4,2.5,1e1,")]).unwrap();
        assert_eq!(filter.capacities, vec![8, 16, -4, 10]);

        let filter = parse(&[("cap", "abc,0")]).unwrap();
        assert!(filter.capacities.is_empty());
    }

    #[test]
    fn page_and_limit_fall_back_to_defaults() {
        let filter = parse(&[("page", "0"), ("limit", "-5")]).unwrap();
        assert_eq!(filter.page, 1);
        assert_eq!(filter.limit, 24);

        let filter = parse(&[("page", "3"), ("limit", "10")]).unwrap();
        assert_eq!(filter.page, 3);
        assert_eq!(filter.limit, 10);
    }

    #[test]
    fn invalid_sort_is_not_a_validation_error() {
        let filter = parse(&[("sort", "bogus")]).unwrap();
        assert_eq!(filter.sort, SortKey::Recommended);
    }

    #[test]
    fn bounds_are_inclusive() {
        let bounds = Bounds::new(Some(16), Some(32));
        assert!(bounds.contains(16));
        assert!(bounds.contains(32));
        assert!(!bounds.contains(8));
        assert!(!bounds.contains(64));
        assert!(Bounds::default().contains(i32::MIN));
    }
}
