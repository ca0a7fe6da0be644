use {colored_json::ToColoredJson, serde::Serialize, std::fmt::Display};

/// Writes command results to stdout, either as human-readable text or as
/// pretty-printed JSON.
#[derive(Clone, Copy)]
pub struct Printer {
    json: bool,
}

impl Printer {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn print<T>(&self, data: &T) -> anyhow::Result<()>
    where
        T: Serialize + Display,
    {
        if self.json {
            print_json_pretty(data)
        } else {
            println!("{data}");
            Ok(())
        }
    }
}

fn print_json_pretty<T>(data: T) -> anyhow::Result<()>
where
    T: Serialize,
{
    let json = serde_json::to_string_pretty(&data)?;
    let colored = json.to_colored_json_auto()?;

    println!("{colored}");

    Ok(())
}
