use heck::CamelCase;

use avrogen_core::CasingRules;

pub struct CsharpCasingRules;

impl CasingRules<String> for CsharpCasingRules {
    fn to_namespace_segment_case(&self, value: String) -> String {
        value.to_camel_case()
    }

    fn to_type_name_case(&self, value: String) -> String {
        value.to_camel_case()
    }

    fn to_record_member_case(&self, value: String) -> String {
        value.to_camel_case()
    }
}

/// Applies namespace-segment casing to each segment of a dot- or
/// slash-delimited namespace path, preserving the delimiters.
pub fn normalize_namespace<R: CasingRules<String>>(raw: &str, rules: &R) -> String {
    let mut normalized = String::with_capacity(raw.len());
    let mut segment = String::new();

    for ch in raw.chars() {
        if ch == '.' || ch == '/' {
            normalized.push_str(&rules.to_namespace_segment_case(segment.clone()));
            normalized.push(ch);
            segment.clear();
        } else {
            segment.push(ch);
        }
    }

    normalized.push_str(&rules.to_namespace_segment_case(segment));
    normalized
}
