//! Rule engine — pure logic, no I/O.
//!
//! Every rule in the list is evaluated against the payload and every
//! violation is collected, so a client can fix all of its mistakes in a
//! single round trip.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use super::rules::{FieldKind, FieldRule};

/// Evaluate all rules, in list order, against a decoded payload.
///
/// Returns the ordered list of violation messages; empty means valid.
pub fn validate(payload: &Map<String, Value>, rules: &[FieldRule]) -> Vec<String> {
    let mut violations = Vec::new();

    for rule in rules {
        match payload.get(rule.name) {
            None => {
                if rule.required {
                    violations.push(format!("El campo '{}' es obligatorio.", rule.name));
                }
            }
            Some(value) => match rule.kind {
                FieldKind::Text => check_text(rule, value, &mut violations),
                FieldKind::Number => check_number(rule, value, &mut violations),
                FieldKind::Boolean => check_boolean(rule, value, &mut violations),
                FieldKind::Date => check_date(rule, value, &mut violations),
            },
        }
    }

    violations
}

fn check_text(rule: &FieldRule, value: &Value, out: &mut Vec<String>) {
    let Value::String(s) = value else {
        out.push(format!(
            "El campo '{}' debe ser una cadena de texto.",
            rule.name
        ));
        return;
    };

    // The two bounds are checked independently on purpose: a table with
    // minimum > maximum makes every non-empty string fail both.
    let length = s.chars().count() as i64;
    if length < rule.minimum {
        out.push(format!(
            "El campo '{}' debe tener al menos {} caracteres.",
            rule.name, rule.minimum
        ));
    }
    if length > rule.maximum {
        out.push(format!(
            "El campo '{}' no debe exceder los {} caracteres.",
            rule.name, rule.maximum
        ));
    }
}

fn check_number(rule: &FieldRule, value: &Value, out: &mut Vec<String>) {
    // Type check only. The rule's bounds are not evaluated for numbers.
    if !value.is_number() {
        out.push(format!(
            "El campo '{}' debe ser un valor numérico.",
            rule.name
        ));
    }
}

fn check_boolean(rule: &FieldRule, value: &Value, out: &mut Vec<String>) {
    if !value.is_boolean() {
        out.push(format!(
            "El campo '{}' debe ser un valor booleano.",
            rule.name
        ));
    }
}

fn check_date(rule: &FieldRule, value: &Value, out: &mut Vec<String>) {
    // A date must be a string of exactly `minimum` characters; anything
    // else (wrong length or not a string at all) is a length violation.
    let s = match value {
        Value::String(s) if s.chars().count() as i64 == rule.minimum => s,
        _ => {
            out.push(format!(
                "El campo '{}' debe tener una longitud de {} caracteres.",
                rule.name, rule.minimum
            ));
            return;
        }
    };

    // Strict calendar parse: 2024-02-30 is rejected even though 30 <= 31.
    if NaiveDate::parse_from_str(s, "%Y-%m-%d").is_err() {
        out.push(format!(
            "El campo '{}' no es una fecha válida con el formato yyyy-MM-dd.",
            rule.name
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn nombre_rule() -> FieldRule {
        FieldRule::text("nombre", true, 3, 20)
    }

    #[test]
    fn valid_text_yields_no_violations() {
        let violations = validate(&payload(&[("nombre", json!("Activo"))]), &[nombre_rule()]);
        assert!(violations.is_empty());
    }

    #[test]
    fn missing_required_field_yields_exactly_one_violation() {
        let violations = validate(&payload(&[]), &[nombre_rule()]);
        assert_eq!(violations, vec!["El campo 'nombre' es obligatorio."]);
    }

    #[test]
    fn missing_optional_field_is_skipped() {
        let rule = FieldRule::text("telefono", false, 7, 15);
        let violations = validate(&payload(&[]), &[rule]);
        assert!(violations.is_empty());
    }

    #[test]
    fn text_at_minimum_and_maximum_passes() {
        let rules = [nombre_rule()];
        assert!(validate(&payload(&[("nombre", json!("abc"))]), &rules).is_empty());
        assert!(validate(&payload(&[("nombre", json!("a".repeat(20)))]), &rules).is_empty());
    }

    #[test]
    fn text_below_minimum_yields_one_length_violation() {
        let violations = validate(&payload(&[("nombre", json!("Ok"))]), &[nombre_rule()]);
        assert_eq!(
            violations,
            vec!["El campo 'nombre' debe tener al menos 3 caracteres."]
        );
    }

    #[test]
    fn text_above_maximum_yields_one_length_violation() {
        let violations = validate(
            &payload(&[("nombre", json!("a".repeat(21)))]),
            &[nombre_rule()],
        );
        assert_eq!(
            violations,
            vec!["El campo 'nombre' no debe exceder los 20 caracteres."]
        );
    }

    #[test]
    fn text_length_counts_characters_not_bytes() {
        // "ñán" is 3 characters but 5 bytes.
        let violations = validate(&payload(&[("nombre", json!("ñán"))]), &[nombre_rule()]);
        assert!(violations.is_empty());
    }

    #[test]
    fn number_for_text_yields_type_violation_and_no_length_checks() {
        let violations = validate(&payload(&[("nombre", json!(5))]), &[nombre_rule()]);
        assert_eq!(
            violations,
            vec!["El campo 'nombre' debe ser una cadena de texto."]
        );
    }

    #[test]
    fn misconfigured_bounds_fail_both_length_checks() {
        // minimum > maximum: the checks are independent, so both fire.
        let rule = FieldRule::text("codigo", true, 10, 4);
        let violations = validate(&payload(&[("codigo", json!("abcdef"))]), &[rule]);
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn number_accepts_integers_and_decimals() {
        let rule = FieldRule::number("precio", true, 1, 9999);
        assert!(validate(&payload(&[("precio", json!(42))]), &[rule.clone()]).is_empty());
        assert!(validate(&payload(&[("precio", json!(19.99))]), &[rule]).is_empty());
    }

    #[test]
    fn number_bounds_are_not_enforced() {
        // The table carries 1..9999 but the engine only type-checks.
        let rule = FieldRule::number("cantidad", true, 1, 9999);
        assert!(validate(&payload(&[("cantidad", json!(0))]), &[rule.clone()]).is_empty());
        assert!(validate(&payload(&[("cantidad", json!(1_000_000))]), &[rule]).is_empty());
    }

    #[test]
    fn string_for_number_yields_type_violation() {
        let rule = FieldRule::number("cantidad", true, 1, 9999);
        let violations = validate(&payload(&[("cantidad", json!("7"))]), &[rule]);
        assert_eq!(
            violations,
            vec!["El campo 'cantidad' debe ser un valor numérico."]
        );
    }

    #[test]
    fn boolean_accepts_only_boolean_literals() {
        let rule = FieldRule::boolean("activo", false);
        assert!(validate(&payload(&[("activo", json!(true))]), &[rule.clone()]).is_empty());

        let violations = validate(&payload(&[("activo", json!("true"))]), &[rule]);
        assert_eq!(
            violations,
            vec!["El campo 'activo' debe ser un valor booleano."]
        );
    }

    #[test]
    fn null_counts_as_present_and_fails_the_type_check() {
        let violations = validate(&payload(&[("nombre", Value::Null)]), &[nombre_rule()]);
        assert_eq!(
            violations,
            vec!["El campo 'nombre' debe ser una cadena de texto."]
        );
    }

    #[test]
    fn leap_day_is_a_valid_date() {
        let rule = FieldRule::date("fecha", true, 10);
        let violations = validate(&payload(&[("fecha", json!("2024-02-29"))]), &[rule]);
        assert!(violations.is_empty());
    }

    #[test]
    fn leap_day_in_a_non_leap_year_is_rejected() {
        let rule = FieldRule::date("fecha", true, 10);
        let violations = validate(&payload(&[("fecha", json!("2023-02-29"))]), &[rule]);
        assert_eq!(
            violations,
            vec!["El campo 'fecha' no es una fecha válida con el formato yyyy-MM-dd."]
        );
    }

    #[test]
    fn calendar_overflow_is_rejected() {
        // Day 30 does not exist in February even though 30 <= 31.
        let rule = FieldRule::date("fecha", true, 10);
        let violations = validate(&payload(&[("fecha", json!("2024-02-30"))]), &[rule]);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("no es una fecha válida"));
    }

    #[test]
    fn date_with_wrong_length_yields_length_violation_only() {
        let rule = FieldRule::date("fecha", true, 10);
        let violations = validate(&payload(&[("fecha", json!("2024-2-9"))]), &[rule]);
        assert_eq!(
            violations,
            vec!["El campo 'fecha' debe tener una longitud de 10 caracteres."]
        );
    }

    #[test]
    fn non_string_date_yields_length_violation() {
        let rule = FieldRule::date("fecha", true, 10);
        let violations = validate(&payload(&[("fecha", json!(20240229))]), &[rule]);
        assert_eq!(
            violations,
            vec!["El campo 'fecha' debe tener una longitud de 10 caracteres."]
        );
    }

    #[test]
    fn all_rules_are_evaluated_and_order_is_preserved() {
        let rules = [
            FieldRule::text("nombre", true, 3, 50),
            FieldRule::number("cantidad", true, 1, 9999),
            FieldRule::boolean("activo", true),
        ];
        let violations = validate(&payload(&[("cantidad", json!("muchos"))]), &rules);
        assert_eq!(
            violations,
            vec![
                "El campo 'nombre' es obligatorio.",
                "El campo 'cantidad' debe ser un valor numérico.",
                "El campo 'activo' es obligatorio.",
            ]
        );
    }

    #[test]
    fn extra_payload_fields_are_ignored() {
        let violations = validate(
            &payload(&[("nombre", json!("Activo")), ("sobra", json!(123))]),
            &[nombre_rule()],
        );
        assert!(violations.is_empty());
    }
}
