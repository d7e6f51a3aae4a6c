//! Render a [`Config`] as the `wp-config.php` WordPress bootstraps from.
//!
//! Every value becomes a single-quoted PHP literal, so the only characters
//! that need escaping are `\` and `'`.

use crate::config::Config;
use crate::config::secrets::ExposeSecret;
use crate::error::Result;
use std::io::Write;

/// Write the rendered configuration to `out`.
pub fn write_wp_config<W: Write>(config: &Config, mut out: W) -> Result<()> {
    writeln!(out, "<?php")?;
    writeln!(out)?;
    writeln!(out, "// ** Database settings ** //")?;
    define(&mut out, "DB_NAME", config.database_name())?;
    define(&mut out, "DB_USER", config.database_user())?;
    define(&mut out, "DB_PASSWORD", config.database_password().expose_secret())?;
    define(&mut out, "DB_HOST", config.database_host())?;
    define(&mut out, "DB_CHARSET", config.database_charset())?;
    define(&mut out, "DB_COLLATE", config.database_collation())?;
    writeln!(out)?;

    writeln!(out, "// ** Authentication unique keys and salts ** //")?;
    for (key, value) in config.auth_keys().iter() {
        define(&mut out, key.name(), value.expose_secret())?;
    }
    writeln!(out)?;

    writeln!(out, "$table_prefix = {};", php_string(config.table_prefix()))?;
    writeln!(out)?;
    writeln!(out, "define( 'WP_DEBUG', {} );", config.debug_enabled())?;
    writeln!(out)?;

    define(&mut out, "WP_HOME", config.site_url())?;
    define(&mut out, "WP_SITEURL", config.site_url())?;
    writeln!(out)?;

    writeln!(out, "if ( ! defined( 'ABSPATH' ) ) {{")?;
    writeln!(out, "    define( 'ABSPATH', __DIR__ . '/' );")?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    writeln!(out, "require_once ABSPATH . 'wp-settings.php';")?;
    out.flush()?;
    Ok(())
}

/// Render the configuration to a string.
pub fn to_wp_config(config: &Config) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_wp_config(config, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

fn define<W: Write>(out: &mut W, name: &str, value: &str) -> std::io::Result<()> {
    writeln!(out, "define( '{name}', {} );", php_string(value))
}

/// Quote `value` as a PHP single-quoted string literal.
pub fn php_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        if c == '\\' || c == '\'' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('\'');
    quoted
}
