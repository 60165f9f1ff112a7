#![allow(dead_code)]

use std::io::Write;

pub fn write_temp_ini(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub const DEPLOY_INI: &str = r#"
[deploy]
hosts =  web01, web02,db01 ,web01
retries = 5
timeout = soon
dry_run = no
notify = YES
verbose = maybe
empty =

[Paths]
Log_Dir = /var/log/app
"#;
