//! フロントエンドに配信するサイト設定（`GET /api/config`）

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub banner_text: String,
    pub assets: SiteAssets,
    pub blog_content: BlogContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteAssets {
    pub balloons: u32,
    pub cloud_messages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogContent {
    pub title: String,
    pub subtitle: String,
    pub sections: Vec<ContentBlock>,
}

/// ブログページの構造化コンテンツ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Paragraph { content: String },
    Gallery { images: Vec<GalleryImage> },
    List { items: Vec<String> },
    Wishes { wishes: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            banner_text: "Happy Birthday, My Love!".to_string(),
            assets: SiteAssets {
                balloons: 8,
                cloud_messages: strings(&[
                    "Best Wishes!",
                    "Happy Birthday!",
                    "You're Amazing!",
                    "So Special!",
                    "Joy & Happiness!",
                    "Love You!",
                ]),
            },
            blog_content: BlogContent {
                title: "💖 My Special Message for You 💖".to_string(),
                subtitle: "A Collection of Love and Memories".to_string(),
                sections: vec![
                    ContentBlock::Paragraph {
                        content: "My dearest love, every day with you feels like a beautiful dream come true. Your smile lights up my world in ways words cannot describe.".to_string(),
                    },
                    ContentBlock::Paragraph {
                        content: "You have this incredible ability to make everything better just by being you. Whether I'm having a tough day or facing challenges, the thought of you brings instant comfort and joy to my heart. 💖".to_string(),
                    },
                    ContentBlock::Gallery {
                        images: (1..=5)
                            .map(|n| GalleryImage {
                                src: format!("assets/images/kitty_{n:02}.png"),
                                alt: format!("Cute Kitty {n}"),
                            })
                            .collect(),
                    },
                    ContentBlock::List {
                        items: strings(&[
                            "💕 Your kind heart that cares for everyone",
                            "🌟 Your incredible strength and resilience",
                            "😊 The way you find joy in little things",
                            "🤗 Your warm hugs that feel like home",
                            "🎯 Your determination to achieve your dreams",
                            "💝 The love you share so freely",
                        ]),
                    },
                    ContentBlock::Wishes {
                        wishes: strings(&[
                            "🎂 May your day be filled with joy and laughter!",
                            "🎁 May all your dreams and wishes come true!",
                            "💫 May this year bring you endless happiness!",
                            "🌟 May you always feel loved and cherished!",
                        ]),
                    },
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_config_serializes_with_camel_case_keys() {
        // テスト項目: デフォルト設定がフロントエンドの期待するキー名で出力される
        // given (前提条件):
        let config = SiteConfig::default();

        // when (操作):
        let value = serde_json::to_value(&config).unwrap();

        // then (期待する結果):
        assert_eq!(value["bannerText"], json!("Happy Birthday, My Love!"));
        assert_eq!(value["assets"]["balloons"], json!(8));
        assert_eq!(
            value["assets"]["cloudMessages"].as_array().unwrap().len(),
            6
        );
        assert_eq!(
            value["blogContent"]["sections"][0]["type"],
            json!("paragraph")
        );
        assert_eq!(
            value["blogContent"]["sections"][2]["images"][0],
            json!({"src": "assets/images/kitty_01.png", "alt": "Cute Kitty 1"})
        );
    }

    #[test]
    fn test_content_blocks_deserialize_by_type_tag() {
        // テスト項目: type タグで各コンテンツブロックに振り分けられる
        // given (前提条件):
        let raw = json!([
            {"type": "list", "items": ["a"]},
            {"type": "wishes", "wishes": ["b"]}
        ]);

        // when (操作):
        let blocks: Vec<ContentBlock> = serde_json::from_value(raw).unwrap();

        // then (期待する結果):
        assert_eq!(
            blocks,
            vec![
                ContentBlock::List {
                    items: vec!["a".to_string()]
                },
                ContentBlock::Wishes {
                    wishes: vec!["b".to_string()]
                },
            ]
        );
    }
}
