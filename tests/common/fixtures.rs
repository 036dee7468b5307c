//! Test fixtures - reusable payloads and configs.

/// Three-level food safety taxonomy
pub const SAMPLE_TREE: &str = r#"[
  {
    "value": "animaux",
    "name": "Animaux",
    "children": [
      {
        "value": "ruminants",
        "name": "Ruminants",
        "children": [
          { "value": "bov", "name": "Bovins" },
          { "value": "ovi", "name": "Ovins" }
        ]
      },
      { "value": "vol", "name": "Volailles" }
    ]
  },
  {
    "value": "bio",
    "name": "Biologique",
    "children": [
      {
        "value": "bact",
        "name": "Bactéries",
        "children": [
          { "value": "listeria", "name": "Listeria" },
          { "value": "salmonella", "name": "Salmonella" }
        ]
      },
      { "value": "virus", "name": "Virus", "children": [] }
    ]
  }
]"#;

/// Same taxonomy under a `categories` wrapper
pub const WRAPPED_TREE: &str = r#"{
  "categories": [
    {
      "value": "animaux",
      "name": "Animaux",
      "children": [{ "value": "bov", "name": "Bovins" }]
    }
  ]
}"#;

/// `bov` appears twice
pub const DUPLICATE_TREE: &str = r#"[
  { "value": "a", "name": "A", "children": [{ "value": "bov", "name": "Bovins" }] },
  { "value": "b", "name": "B", "children": [{ "value": "bov", "name": "Bovins bis" }] }
]"#;

/// Second child has no name
pub const MISSING_NAME_TREE: &str = r#"[
  { "value": "a", "name": "A", "children": [
    { "value": "a1", "name": "A1" },
    { "value": "a2" }
  ] }
]"#;
