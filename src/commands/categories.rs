// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(config: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    if maybe_print_json(json_flag, false, &config.categories)? {
        return Ok(());
    }
    let data = config
        .categories
        .iter()
        .map(|c| vec![c.key.clone(), c.name.clone(), c.icon.clone(), c.color.clone()])
        .collect();
    println!("{}", pretty_table(&["Key", "Name", "Icon", "Color"], data));
    Ok(())
}
