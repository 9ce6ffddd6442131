//! Flux query examples prompt.

use super::McpPrompt;

const TEXT: &str = r#"# Flux Query Examples

## Read recent data
```flux
from(bucket: "my-bucket")
  |> range(start: -1h)
```

## Filter by measurement and field
```flux
from(bucket: "my-bucket")
  |> range(start: -1h)
  |> filter(fn: (r) => r._measurement == "cpu")
  |> filter(fn: (r) => r._field == "usage_user")
```

## Aggregate into windows
```flux
from(bucket: "my-bucket")
  |> range(start: -24h)
  |> filter(fn: (r) => r._measurement == "cpu")
  |> aggregateWindow(every: 1h, fn: mean, createEmpty: false)
```

## Latest value per series
```flux
from(bucket: "my-bucket")
  |> range(start: -1h)
  |> last()
```

## Group and summarize
```flux
from(bucket: "my-bucket")
  |> range(start: -1h)
  |> filter(fn: (r) => r._measurement == "cpu")
  |> group(columns: ["host"])
  |> mean()
```

## Discover schema
```flux
import "influxdata/influxdb/schema"

schema.measurements(bucket: "my-bucket")
```
```flux
import "influxdata/influxdb/schema"

schema.tagKeys(bucket: "my-bucket", predicate: (r) => r._measurement == "cpu")
```

Results come back as rows keyed by column name. `_time`, `_value`,
`_field` and `_measurement` are always present on raw data; tags appear as
their own columns.
"#;

/// Prompt with common Flux query patterns.
pub struct FluxQueryExamplesPrompt;

impl McpPrompt for FluxQueryExamplesPrompt {
    fn name(&self) -> &'static str {
        "flux-query-examples"
    }

    fn description(&self) -> &'static str {
        "Example Flux queries for InfluxDB"
    }

    fn render(&self) -> String {
        TEXT.to_string()
    }
}
