//! Token view models: registry summaries, search filtering, and the
//! create-form request.

use serde::{Deserialize, Serialize};

use crate::abi::Launchpad::TokenListing;
use crate::utils::format_eth;

/// Fallback display values substituted for empty registry fields.
pub const UNNAMED_TOKEN: &str = "Unnamed Token";
pub const NO_SYMBOL: &str = "N/A";
pub const NO_DESCRIPTION: &str = "No description available";

/// One card in the explorer grid, carried to the detail screen on
/// navigation so the registry is not re-read.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenSummary {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub image_url: String,
    /// Decimal ETH string, already converted from wei.
    pub funding_raised: String,
    pub token_address: String,
    pub creator_address: String,
}

impl TokenSummary {
    /// Normalize one registry row. Empty display fields get placeholder
    /// text so every rendered card has a name, symbol, and description;
    /// the registry carries no id, so the row's position stands in.
    pub fn from_listing(index: usize, listing: &TokenListing) -> Self {
        Self {
            id: index.to_string(),
            name: non_empty_or(&listing.name, UNNAMED_TOKEN),
            symbol: non_empty_or(&listing.symbol, NO_SYMBOL),
            description: non_empty_or(&listing.description, NO_DESCRIPTION),
            image_url: listing.tokenImageUrl.trim().to_string(),
            funding_raised: format_eth(listing.fundingRaised),
            token_address: listing.tokenAddress.to_string(),
            creator_address: listing.creatorAddress.to_string(),
        }
    }

    /// Placeholder summary for a deep-linked detail page that arrived
    /// without explorer state.
    pub fn placeholder(token_address: &str) -> Self {
        Self {
            id: "0".to_string(),
            name: "Unknown".to_string(),
            symbol: "Unknown".to_string(),
            description: NO_DESCRIPTION.to_string(),
            image_url: String::new(),
            funding_raised: "0.0".to_string(),
            token_address: token_address.to_string(),
            creator_address: "0x0000000000000000000000000000000000000000".to_string(),
        }
    }

    /// Funding raised as a float for progress math.
    pub fn funding_raised_eth(&self) -> f64 {
        self.funding_raised.parse().unwrap_or(0.0)
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Case-insensitive substring filter over name and symbol. An empty query
/// returns the full list unchanged. Purely in-memory: the explorer calls
/// this on every keystroke without re-fetching.
pub fn filter_tokens<'a>(tokens: &'a [TokenSummary], query: &str) -> Vec<&'a TokenSummary> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return tokens.iter().collect();
    }
    tokens
        .iter()
        .filter(|t| {
            t.name.to_lowercase().contains(&needle) || t.symbol.to_lowercase().contains(&needle)
        })
        .collect()
}

/// The create-token form. Validated client-side before any transaction is
/// attempted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewTokenRequest {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub image_url: String,
}

impl NewTokenRequest {
    /// Name, symbol, and description are required; the image URL is
    /// optional. Whitespace-only input counts as empty.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Token name is required".to_string());
        }
        if self.symbol.trim().is_empty() {
            return Err("Token symbol is required".to_string());
        }
        if self.description.trim().is_empty() {
            return Err("Token description is required".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Address, U256};
    use alloy_primitives::utils::parse_ether;

    fn listing(name: &str, symbol: &str, description: &str, funding_eth: &str) -> TokenListing {
        TokenListing {
            name: name.to_string(),
            symbol: symbol.to_string(),
            description: description.to_string(),
            tokenImageUrl: String::new(),
            fundingRaised: parse_ether(funding_eth).unwrap(),
            tokenAddress: Address::repeat_byte(0x11),
            creatorAddress: Address::repeat_byte(0x22),
        }
    }

    fn summary(name: &str, symbol: &str) -> TokenSummary {
        TokenSummary::from_listing(0, &listing(name, symbol, "d", "0"))
    }

    #[test]
    fn normalization_substitutes_defaults_for_empty_fields() {
        let raw = TokenListing {
            name: String::new(),
            symbol: "  ".to_string(),
            description: String::new(),
            tokenImageUrl: String::new(),
            fundingRaised: U256::ZERO,
            tokenAddress: Address::ZERO,
            creatorAddress: Address::ZERO,
        };
        let s = TokenSummary::from_listing(3, &raw);
        assert_eq!(s.id, "3");
        assert_eq!(s.name, UNNAMED_TOKEN);
        assert_eq!(s.symbol, NO_SYMBOL);
        assert_eq!(s.description, NO_DESCRIPTION);
        assert_eq!(s.funding_raised, "0.0");
        assert!(!s.name.is_empty() && !s.symbol.is_empty() && !s.description.is_empty());
    }

    #[test]
    fn normalization_converts_funding_to_eth() {
        let s = TokenSummary::from_listing(0, &listing("Doge", "DOGE", "much wow", "12.5"));
        assert_eq!(s.funding_raised, "12.5");
        assert_eq!(s.funding_raised_eth(), 12.5);
    }

    #[test]
    fn filter_is_case_insensitive_over_name_and_symbol() {
        let tokens = vec![
            summary("DogeCoin", "DOGE"),
            summary("Pepe", "PEPE"),
            summary("Moon Lambo", "LAMBO"),
        ];
        let by_name = filter_tokens(&tokens, "dOgE");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "DogeCoin");

        // Symbol-only match.
        let by_symbol = filter_tokens(&tokens, "lamb");
        assert_eq!(by_symbol.len(), 1);
        assert_eq!(by_symbol[0].symbol, "LAMBO");

        assert!(filter_tokens(&tokens, "zzz").is_empty());
    }

    #[test]
    fn empty_query_returns_full_list() {
        let tokens = vec![summary("A", "A"), summary("B", "B")];
        assert_eq!(filter_tokens(&tokens, "").len(), 2);
        assert_eq!(filter_tokens(&tokens, "   ").len(), 2);
    }

    #[test]
    fn create_form_rejects_missing_name_even_with_symbol() {
        let form = NewTokenRequest {
            name: String::new(),
            symbol: "DOGE".to_string(),
            description: "much wow".to_string(),
            image_url: String::new(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn create_form_image_url_is_optional() {
        let form = NewTokenRequest {
            name: "DogeCoin".to_string(),
            symbol: "DOGE".to_string(),
            description: "much wow".to_string(),
            image_url: String::new(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn create_form_rejects_whitespace_only_description() {
        let form = NewTokenRequest {
            name: "DogeCoin".to_string(),
            symbol: "DOGE".to_string(),
            description: "   ".to_string(),
            image_url: String::new(),
        };
        assert!(form.validate().is_err());
    }
}
