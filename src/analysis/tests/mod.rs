// Copyright (c) 2025 Kilo Search Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Property-based tests for text analysis.
