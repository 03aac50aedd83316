use dating_profile::model::{
    ActivityTag, ExperienceTag, InterestTag, LifeStyleTag, LocationInfo, LocationType,
    LoveExpectationTag, Tag, UserProfile, YesNo,
};
use serde_json::{Value, json};

fn sample_profile() -> UserProfile {
    UserProfile {
        account_id: 42,
        image: vec!["https://cdn.example.com/a.jpg".into()],
        id: 7,
        user_id: 42,
        nickname: "小鱼".into(),
        height: 168,
        body_type: 2,
        personality_type: 1,
        location_city_info: Some(LocationInfo::new(510100, "成都", LocationType::City)),
        gender: 2,
        find_gender: 1,
        school: "四川大学".into(),
        job_id: 12,
        job_name: "设计师".into(),
        education_level: 4,
        birth: 788_918_400,
        income_type: 3,
        income_display: 1,
        email: "fish@example.com".into(),
        images: vec![
            "https://cdn.example.com/3.jpg".into(),
            "https://cdn.example.com/1.jpg".into(),
            "https://cdn.example.com/2.jpg".into(),
        ],
        intro: "hi".into(),
        life_intro: String::new(),
        hobby_intro: "climbing".into(),
        life_style_intro: String::new(),
        find_location_city_ids: None,
        find_location_city_info: Some(vec![
            LocationInfo::new(310100, "上海", LocationType::City),
            LocationInfo::new(110100, "北京", LocationType::City),
        ]),
        find_age_min: 25,
        find_age_max: 35,
        find_height_min: 170,
        find_height_max: 190,
        find_body_types: Some(vec![3, 1]),
        find_education_levels: None,
        find_other_intro: String::new(),
        experience_tags: Some(vec![ExperienceTag::new(1, "留学")]),
        interest_tags: Some(vec![
            InterestTag::new(5, "攀岩"),
            InterestTag::new(2, "电影"),
        ]),
        activity_tags: Some(vec![]),
        love_expectation_tags: None,
        life_style_tags: Some(vec![LifeStyleTag::new(8, "早睡")]),
        required_fields: vec!["nickname".into(), "birth".into()],
        is_stable: YesNo::Yes,
        operation_remark: "verified".into(),
        tags: Some(vec![Tag::new(1, "new"), Tag::new(1, "新人")]),
        home_location_country_info: Some(LocationInfo::new(86, "中国", LocationType::Country)),
        home_location_state_info: Some(LocationInfo::new(51, "四川", LocationType::Province)),
        home_location_city_info: None,
        home_location_city_id: 0,
        home_location_country_id: 86,
        home_location_state_id: 51,
        location_city_id: 510100,
    }
}

const NULLABLE_FIELDS: [&str; 14] = [
    "location_city_info",
    "find_location_city_ids",
    "find_location_city_info",
    "find_body_types",
    "find_education_levels",
    "experience_tags",
    "interest_tags",
    "activity_tags",
    "love_expectation_tags",
    "life_style_tags",
    "tags",
    "home_location_country_info",
    "home_location_state_info",
    "home_location_city_info",
];

#[cfg(test)]
mod nullability_tests {
    use super::*;

    #[test]
    fn test_every_nullable_field_accepts_null() {
        let mut value = serde_json::to_value(sample_profile()).unwrap();
        for field in NULLABLE_FIELDS {
            value[field] = Value::Null;
        }

        let profile: UserProfile = serde_json::from_value(value).unwrap();
        assert!(profile.location_city_info.is_none());
        assert!(profile.interest_tags.is_none());
        assert!(profile.tags.is_none());
        assert!(profile.find_body_types.is_none());
        assert!(profile.home_location_state_info.is_none());
    }

    #[test]
    fn test_absent_nullable_field_decodes_as_null() {
        let mut value = serde_json::to_value(sample_profile()).unwrap();
        let map = value.as_object_mut().unwrap();
        for field in NULLABLE_FIELDS {
            map.remove(field);
        }

        let profile: UserProfile = serde_json::from_value(value).unwrap();
        let encoded = serde_json::to_value(&profile).unwrap();
        for field in NULLABLE_FIELDS {
            assert_eq!(encoded[field], Value::Null, "field {} not null", field);
        }
    }

    #[test]
    fn test_none_is_encoded_not_omitted() {
        let encoded = serde_json::to_value(UserProfile::default()).unwrap();
        let map = encoded.as_object().unwrap();
        for field in NULLABLE_FIELDS {
            assert_eq!(map.get(field), Some(&Value::Null));
        }
    }

    #[test]
    fn test_empty_list_stays_distinct_from_null() {
        let profile = sample_profile();
        let encoded = serde_json::to_value(&profile).unwrap();
        assert_eq!(encoded["activity_tags"], json!([]));
        assert_eq!(encoded["love_expectation_tags"], Value::Null);

        let decoded: UserProfile = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded.activity_tags, Some(vec![]));
        assert_eq!(decoded.love_expectation_tags, None);
    }

    #[test]
    fn test_non_nullable_fields_reject_null() {
        for field in ["nickname", "images", "id", "is_stable", "required_fields"] {
            let mut value = serde_json::to_value(sample_profile()).unwrap();
            value[field] = Value::Null;
            assert!(
                serde_json::from_value::<UserProfile>(value).is_err(),
                "{} accepted null",
                field
            );
        }
    }
}

#[cfg(test)]
mod round_trip_tests {
    use super::*;

    #[test]
    fn test_round_trip_preserves_all_fields() {
        let profile = sample_profile();
        let text = serde_json::to_string(&profile).unwrap();
        let decoded: UserProfile = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded, profile);
    }

    #[test]
    fn test_round_trip_preserves_list_order() {
        let decoded: UserProfile =
            serde_json::from_str(&serde_json::to_string(&sample_profile()).unwrap()).unwrap();

        assert_eq!(
            decoded.images,
            vec![
                "https://cdn.example.com/3.jpg",
                "https://cdn.example.com/1.jpg",
                "https://cdn.example.com/2.jpg",
            ]
        );
        let interest_ids: Vec<u64> = decoded
            .interest_tags
            .unwrap()
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(interest_ids, vec![5, 2]);
        let cities: Vec<&str> = decoded
            .find_location_city_info
            .as_deref()
            .unwrap()
            .iter()
            .map(|l| l.name.as_str())
            .collect();
        assert_eq!(cities, vec!["上海", "北京"]);
        assert_eq!(decoded.find_body_types, Some(vec![3, 1]));
    }

    #[test]
    fn test_wire_field_names_match_client() {
        let value = serde_json::to_value(sample_profile()).unwrap();
        assert_eq!(value["userId"], json!(42));
        assert_eq!(value["user_id"], json!(42));
        assert_eq!(value["is_stable"], json!(1));
        assert_eq!(
            value["home_location_country_info"],
            json!({"id": 86, "name": "中国", "type": 1})
        );
        assert!(value.get("account_id").is_none());
    }
}

#[cfg(test)]
mod tag_tests {
    use super::*;

    #[test]
    fn test_same_id_different_title_kept() {
        let decoded: UserProfile =
            serde_json::from_str(&serde_json::to_string(&sample_profile()).unwrap()).unwrap();
        let tags = decoded.tags.unwrap();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].id, tags[1].id);
        assert_ne!(tags[0].title, tags[1].title);
    }

    #[test]
    fn test_facet_tags_share_wire_shape() {
        let activity = serde_json::to_value(ActivityTag::new(3, "徒步")).unwrap();
        let love = serde_json::to_value(LoveExpectationTag::new(3, "徒步")).unwrap();
        assert_eq!(activity, love);
        assert_eq!(activity, json!({"id": 3, "title": "徒步"}));
    }

    #[test]
    fn test_tag_titles_across_facets() {
        let profile = sample_profile();
        assert_eq!(
            profile.tag_titles(),
            vec!["留学", "攀岩", "电影", "早睡", "new", "新人"]
        );
    }
}

#[cfg(test)]
mod location_tests {
    use super::*;

    #[test]
    fn test_unknown_location_type_rejected_on_decode() {
        let err = serde_json::from_value::<LocationInfo>(json!({"id": 1, "name": "x", "type": 4}));
        assert!(err.is_err());
        let err = serde_json::from_value::<LocationInfo>(json!({"id": 1, "name": "x", "type": 0}));
        assert!(err.is_err());
    }

    #[test]
    fn test_negative_identifier_rejected() {
        let err = serde_json::from_value::<LocationInfo>(json!({"id": -1, "name": "x", "type": 1}));
        assert!(err.is_err());
    }

    #[test]
    fn test_sample_profile_conforms() {
        assert!(sample_profile().location_slot_mismatches().is_empty());
    }

    #[test]
    fn test_state_slot_with_city_is_mismatch() {
        let profile = UserProfile {
            home_location_state_info: Some(LocationInfo::new(1, "成都", LocationType::City)),
            ..sample_profile()
        };
        let mismatches = profile.location_slot_mismatches();
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].slot, "home_location_state_info");
        assert_eq!(mismatches[0].expected, LocationType::Province);
    }
}
