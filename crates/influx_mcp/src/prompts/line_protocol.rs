//! Line protocol guide prompt.

use super::McpPrompt;

const TEXT: &str = r#"# InfluxDB Line Protocol Guide

Each line is one point:

```
measurement[,tag_key=tag_value...] field_key=field_value[,field_key=field_value...] [timestamp]
```

- **measurement**: name of the measurement (required)
- **tags**: comma separated key=value pairs, indexed, strings only (optional)
- **fields**: comma separated key=value pairs, at least one required
- **timestamp**: integer in the write precision, nanoseconds by default (optional)

## Field value types
- Float: `value=1.5`
- Integer: `value=42i`
- Unsigned integer: `value=42u`
- String: `value="text"`
- Boolean: `value=true`

## Escaping
- Commas, spaces and equals signs in tag keys, tag values and field keys: `\,` `\ ` `\=`
- Double quotes and backslashes in string field values: `\"` `\\`
- Commas and spaces in measurement names: `\,` `\ `

## Examples
```
cpu,host=server01,region=us-west usage_user=23.5,usage_system=5.1 1700000000000000000
weather,location=berlin temperature=21.3,humidity=48i
events,type=deploy message="release 1.2.0",success=true
```

Use the `write-data` tool with `precision` set to `s`, `ms`, `us` or `ns`
to match the timestamps you send.
"#;

/// Prompt explaining InfluxDB line protocol.
pub struct LineProtocolGuidePrompt;

impl McpPrompt for LineProtocolGuidePrompt {
    fn name(&self) -> &'static str {
        "line-protocol-guide"
    }

    fn description(&self) -> &'static str {
        "Guide to writing data in InfluxDB line protocol"
    }

    fn render(&self) -> String {
        TEXT.to_string()
    }
}
