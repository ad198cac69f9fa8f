//! The requirement table.
//!
//! Keys ending in `_s` take the name or path of the offending element as
//! context. Keys are stable identifiers shared with test oracles, so they
//! are never renamed, typos included.

use super::{
    Arity, Contextual, Fixed, RequirementSpec, Section, Status, keys_unique, placeholder_count,
};

requirement_catalog! {
    // 3 Entity Model Wrapper

    fixed CsdlRoot = "csdl_root", EntityModelWrapper, [Enforced]
        "A CSDL document MUST contain a root edmx:Edmx element"
        => "4.0 P3 3.1 #1";

    fixed CsdlDataServices = "csdl_data_services", EntityModelWrapper, [Enforced]
        "[The root] element MUST contain a single direct child \
         edmx:DataServices element"
        => "4.0 P3 3.1 #2";

    fixed EdmxVersion = "edmx_version", EntityModelWrapper, [Enforced]
        "The edmx:Edmx element MUST provide the value 4.0 for the \
         Version attribute"
        => "4.0 P3 3.1.1";

    fixed Schemas = "schemas", EntityModelWrapper, [Enforced]
        "The edmx:DataServices element MUST contain one or more edm:Schema \
         elements"
        => "4.0 P3 3.2";

    fixed Reference = "reference", EntityModelWrapper, [Enforced]
        "The edmx:Reference element MUST contain at least one edmx:Include or \
         edmx:IncludeAnnotations child element"
        => "4.0 P3 3.3";

    fixed ReferenceUri = "reference_uri", EntityModelWrapper, [Enforced]
        "The edmx:Reference element MUST specify a Uri attribute"
        => "4.0 P3 3.3.1 #1";

    fixed UniqueReference = "unique_reference", EntityModelWrapper, [Enforced]
        "Two references MUST NOT specify the same URI"
        => "4.0 P3 3.3.1 #2";

    fixed IncludeNamespace = "include_namespace", EntityModelWrapper, [Enforced]
        "The edmx:Include element MUST provide a Namespace value for the \
         Namespace attribute"
        => "4.0 P3 3.4.1 #1";

    contextual IncludeSchema = "include_schema_s", EntityModelWrapper, [Enforced]
        "The value [of the Namespace attribute] MUST match the namespace of a \
         schema defined in the referenced CSDL document (%s)"
        => "4.0 P3 3.4.1 #2 (%s)";

    contextual UniqueInclude = "unique_include_s", EntityModelWrapper, [Enforced]
        "The same namespace MUST NOT be included more than once (%s)"
        => "4.0 P3 3.4.1 #3 (%s)";

    contextual UniqueNamespace = "unique_namespace_s", EntityModelWrapper, [Enforced]
        "A document MUST NOT assign the same alias to different namespaces and \
         MUST NOT specify an alias with the same name as an in-scope \
         namespace (%s)"
        => "4.0 P3 3.4.2 #1 (%s)";

    contextual ReservedNamespace = "reserved_namespace_s", EntityModelWrapper, [Enforced]
        "The Alias attribute MUST NOT use the reserved values Edm, odata, \
         System, or Transient (%s)"
        => "4.0 P3 3.4.2 #2 (%s)";

    fixed TermNamespace = "term_namespace", EntityModelWrapper, [Enforced]
        "An edmx:IncludeAnnotations element MUST provide a Namespace value for \
         the TermNamespace attribute"
        => "4.0 P3 3.5.1";

    // 4 Common Characteristics of Entity Models

    fixed TypeName = "type_name", CommonCharacteristics, [Enforced]
        "A nominal type has a name that MUST be a SimpleIdentifier"
        => "4.0 P3 4.1 #1";

    contextual TypeQname = "type_qname_s", CommonCharacteristics, [Enforced]
        "The qualified type name MUST be unique within a model (%s)"
        => "4.0 P3 4.1 #2; 4.0 P3 5.1.1 #3; 4.0 P3 8.1.1 #2; 4.0 P3 9.1.1 #2; \
            4.0 P3 10.1.1 #2; 4.0 P3 11.1.1 #2 (%s)";

    /// Unqualified references surface as undeclared names instead.
    fixed TypeRef = "type_ref", CommonCharacteristics, [Untested]
        "When referring to nominal types, the reference MUST use a \
         Namespace-qualified name or an Alias-qualified name"
        => "4.0 P3 4.1 #3";

    contextual Annotations = "annotations_s", CommonCharacteristics, [Enforced]
        "A model element MUST NOT specify more than one annotation for a \
         given combination of Term and Qualifier attributes (%s)"
        => "4.0 P3 4.6 (%s)";

    // 5 Schema

    contextual UniqueSchemaChild = "unique_schema_child_s", Schema, [Enforced]
        "Values of the Name attribute MUST be unique across all direct child \
         elements of a schema (%s)"
        => "4.0 P3 5.1 (%s)";

    fixed SchemaName = "schema_name", Schema, [Enforced]
        "All edm:Schema elements MUST have a namespace defined through a \
         Namespace attribute"
        => "4.0 P3 5.1.1 #1";

    contextual SchemaUnique = "schema_unique_s", Schema, [Enforced]
        "The Schema Namespace attribute MUST be unique within the document (%s)"
        => "4.0 P3 5.1.1 #2 (%s)";

    fixed TypeUnique = "type_unique", Schema, [Superseded(TypeQname)]
        "Identifiers that are used to name types MUST be unique within a \
         namespace"
        => "4.0 P3 5.1.1 #3";

    contextual ReservedSchema = "reserved_schema_s", Schema, [Enforced]
        "The Namespace attribute MUST NOT use the reserved values Edm, odata, \
         System, or Transient (%s)"
        => "4.0 P3 5.1.1 #4 (%s)";

    contextual UniqueAlias = "unique_alias_s", Schema, [Enforced]
        "All edmx:Include and edm:Schema elements within a document MUST specify \
         different values for the Alias attribute (%s)"
        => "4.0 P3 5.1.2 #1 (%s)";

    contextual ReservedAlias = "reserved_alias_s", Schema, [Enforced]
        "The Alias attribute MUST NOT use the reserved values Edm, odata, \
         System, or Transient (%s)"
        => "4.0 P3 5.1.2 #2 (%s)";

    // 6 Structural Property

    /// Key `property_unique`; named apart from `PropertyUnique`, which is
    /// the `property_unique_s` variant.
    fixed PropertySpecifiesUniqueName = "property_unique", StructuralProperty,
        [Superseded(PropertyUnique)]
        "A property MUST specify a unique name"
        => "4.0 P3 6.1 #1";

    /// Key `property_type`; named apart from `PropertyType`, which is the
    /// `property_type_s` variant.
    fixed PropertySpecifiesType = "property_type", StructuralProperty,
        [Superseded(PropertyType)]
        "A property MUST specify a type"
        => "4.0 P3 6.1 #2";

    fixed PropertyName = "property_name", StructuralProperty, [Enforced]
        "The edm:Property element MUST include a Name attribute whose value \
         is a SimpleIdentifier"
        => "4.0 P3 6.1.1 #1";

    contextual PropertyUnique = "property_unique_s", StructuralProperty, [Enforced]
        "The name of the property MUST be unique within the set of \
         structural and navigation properties of the containing structured \
         type and any of its base types (%s)"
        => "4.0 P3 6.1 #1; 4.0 P3 6.1.1 #2; 4.0 P3 7.1.1 #2; 4.0 P3 8 #1 (%s)";

    contextual PropertyType = "property_type_s", StructuralProperty, [Enforced]
        "The edm:Property element MUST include a Type attribute (%s)"
        => "4.0 P3 6.1 #2; 4.0 P3 6.1.2 #1 (%s)";

    contextual PropertyTypeDeclared = "property_type_declared_s", StructuralProperty,
        [Enforced]
        "The value of the Type attribute MUST be the QualifiedName of a \
         primitive type, complex type, or enumeration type in scope, or a \
         collection of one of these types (%s)"
        => "4.0 P3 6.1.2 #2 (%s)";

    fixed PropertyCollExists = "property_coll_exists", StructuralProperty, [Pending]
        "If the edm:Property element contains a Type attribute that specifies \
         a collection, the property MUST always exist"
        => "4.0 P3 6.2.1 #1";

    fixed DecimalPrecision = "decimal_precision", StructuralProperty, [Enforced]
        "For a decimal property the Precision MUST be a positive integer"
        => "4.0 P3 6.2.3 #1";

    fixed TemporalPrecision = "temporal_precision", StructuralProperty, [Enforced]
        "For a temporal property the Precision MUST be a non-negative integer \
         between zero and twelve"
        => "4.0 P3 6.2.3 #2";

    fixed DataLossPrecision = "data_loss_precision", StructuralProperty, [NotValidated]
        "Client developers MUST be aware of the potential for data loss when \
         round-tripping values of greater precision"
        => "4.0 P3 6.2.3 #3";

    fixed ScaleGtPrecision = "scale_gt_precision", StructuralProperty, [Enforced]
        "The value of the Scale attribute MUST be less than or equal to the \
         value of the Precision attribute"
        => "4.0 P3 6.2.4";

    fixed SridValue = "srid_value", StructuralProperty, [Enforced]
        "The value of the SRID attribute MUST be a non-negative integer or \
         the special value variable"
        => "4.0 P3 6.2.6";

    /// Badly escaped attribute values never get past the XML parser.
    fixed StringEscape = "string_escape", StructuralProperty, [NotValidated]
        "Default values of type Edm.String MUST be represented according to the \
         XML escaping rules for character data in attribute values"
        => "4.0 P3 6.2.7 #1";

    contextual PrimitiveDefault = "primitive_default_s", StructuralProperty, [Enforced]
        "Values of other primitive types MUST be represented according to the \
         appropriate alternative in the primitiveValue rule (%s)"
        => "4.0 P3 6.2.7 #2 (%s)";

    // 7 Navigation Property

    fixed NavName = "nav_name", NavigationProperty, [Enforced]
        "The edm:NavigationProperty element MUST include a Name attribute whose \
         value is a SimpleIdentifier"
        => "4.0 P3 7.1.1 #1";

    fixed NavUnique = "nav_unique", NavigationProperty, [Superseded(PropertyUnique)]
        "The name of the navigation property MUST be unique within the set of \
         structural and navigation properties of the containing structured type \
         and any of its base types"
        => "4.0 P3 7.1.1 #2";

    contextual NavType = "nav_type_s", NavigationProperty, [Enforced]
        "The edm:NavigationProperty element MUST include a Type attribute (%s)"
        => "4.0 P3 7.1.2 #1 (%s)";

    contextual NavTypeResolved = "nav_type_resolved_s", NavigationProperty, [Enforced]
        "The value of the type attribute MUST resolve to an entity type or a \
         collection of an entity type (%s)"
        => "4.0 P3 7.1.2 #2 (%s)";

    fixed NavTypeRelated = "nav_type_related", NavigationProperty, [Pending]
        "The related entities MUST be of the specified entity type or one of \
         its subtypes"
        => "4.0 P3 7.1.2 #3";

    contextual NavCollectionExists = "nav_collection_exists_s", NavigationProperty,
        [Enforced]
        "A navigation property whose Type attribute specifies a collection \
         MUST NOT specify a value for the Nullable attribute (%s)"
        => "4.0 P3 7.1.3 (%s)";

    contextual NavPartnerComplex = "nav_partner_complex_s", NavigationProperty, [Enforced]
        "The Partner attribute MUST NOT be specified for navigation properties \
         of complex types (%s)"
        => "4.0 P3 7.1.4 #1 (%s)";

    contextual NavPartnerPath = "nav_partner_path_s", NavigationProperty, [Enforced]
        "The Partner attribute MUST be a path from the entity type specified in \
         the Type attribute to a navigation property defined on that type or a \
         derived type (%s)"
        => "4.0 P3 7.1.4 #2 (%s)";

    contextual NavPartnerNav = "nav_partner_nav_s", NavigationProperty, [Enforced]
        "The Partner path MUST NOT traverse any navigation properties (%s)"
        => "4.0 P3 7.1.4 #3 (%s)";

    contextual NavPartnerType = "nav_partner_type_s", NavigationProperty, [Enforced]
        "The type of the partner navigation property MUST be the containing \
         entity type of the current navigation property or one of its parent \
         entity types (%s)"
        => "4.0 P3 7.1.4 #4 (%s)";

    fixed NavPartnerBacklink = "nav_partner_backlink", NavigationProperty, [Pending]
        "The partner navigation property MUST lead back to the source entity \
         from all related entities"
        => "4.0 P3 7.1.4 #5";

    fixed NavPartnerMultilink = "nav_partner_multilink", NavigationProperty, [Pending]
        "If the Partner attribute identifies a multivalued navigation property, \
         the source entity MUST be part of that collection"
        => "4.0 P3 7.1.4 #6";

    contextual NavPartnerBidirection = "nav_partner_bidirection_s", NavigationProperty,
        [Enforced]
        "The partner navigation property MUST either specify the current \
         navigation property as its partner or it MUST NOT specify a partner \
         attribute (%s)"
        => "4.0 P3 7.1.4 #7 (%s)";

    contextual NavContains = "nav_contains_s", NavigationProperty, [Enforced]
        "Complex types declaring a containment navigation property MUST NOT \
         be used as the type of a collection-valued property (%s)"
        => "4.0 P3 7.1.5 #1 (%s)";

    contextual NavContainsBinding = "nav_contains_binding_s", NavigationProperty,
        [Enforced]
        "Containment navigation properties MUST NOT be specified as the last \
         path segment in the Path attribute of a navigation property binding (%s)"
        => "4.0 P3 7.1.5 #2 (%s)";

    contextual NavRcontains = "nav_rcontains_s", NavigationProperty, [Enforced]
        "If the containment is recursive, the partner navigation property MUST \
         be nullable and specify a single entity type (%s)"
        => "4.0 P3 7.1.5 #3 (%s)";

    contextual NavNrcontains = "nav_nrcontains_s", NavigationProperty, [Enforced]
        "If the containment is not recursive, the partner navigation property \
         MUST NOT be nullable (%s)"
        => "4.0 P3 7.1.5 #4 (%s)";

    contextual NavMultiContains = "nav_multi_contains_s", NavigationProperty, [Enforced]
        "An entity type hierarchy MUST NOT contain more than one navigation \
         property with a Partner attribute referencing a containment \
         relationship (%s)"
        => "4.0 P3 7.1.5 #5 (%s)";

    contextual RefConstraint = "ref_constraint_s", NavigationProperty, [Pending]
        "A referential constraint asserts that the dependent property MUST \
         have the same value as the principal property (%s)"
        => "4.0 P3 7.2 #1 (%s)";

    contextual RefconMatch = "refcon_match_s", NavigationProperty, [Enforced]
        "The type of the dependent property MUST match the type of the \
         principal property (%s)"
        => "4.0 P3 7.2 #2; 4.0 P3 7.2.2 #3 (%s)";

    contextual RefconMatchNull = "refcon_match_null_s", NavigationProperty, [Enforced]
        "If the navigation property on which the referential constraint is \
         defined or the principal property is nullable, then the dependent \
         property MUST be nullable (%s)"
        => "4.0 P3 7.2 #3 (%s)";

    contextual RefconMatchNotnull = "refcon_match_notnull_s", NavigationProperty,
        [Enforced]
        "If both the navigation property and the principal property are not \
         nullable, then the dependent property MUST be marked with the \
         Nullable=\"false\" attribute value (%s)"
        => "4.0 P3 7.2 #4 (%s)";

    contextual RefconProperty = "refcon_property_s", NavigationProperty, [Enforced]
        "A referential constraint MUST specify a value for the Property \
         attribute (%s)"
        => "4.0 P3 7.2.1 #1 (%s)";

    contextual RefconPpath = "refcon_ppath_s", NavigationProperty, [Enforced]
        "The Property attribute value MUST be a path expression resolving to \
         a primitive property of the dependent entity type (%s)"
        => "4.0 P3 7.2.1 #2 (%s)";

    contextual RefconRefprop = "refcon_refprop_s", NavigationProperty, [Enforced]
        "A referential constraint MUST specify a value for the \
         ReferencedProperty attribute (%s)"
        => "4.0 P3 7.2.2 #1 (%s)";

    contextual RefconRppath = "refcon_rppath_s", NavigationProperty, [Enforced]
        "The ReferenceProperty attribute value MUST be a path expression \
         resolving to a primitive property of the principal entity type (%s)"
        => "4.0 P3 7.2.2 #2 (%s)";

    contextual RefconRptype = "refcon_rptype_s", NavigationProperty,
        [Superseded(RefconMatch)]
        "The ReferencedProperty MUST have the same data type as the property \
         of the dependent entity type (%s)"
        => "4.0 P3 7.2.2 #3 (%s)";

    fixed OndeleteValue = "ondelete_value", NavigationProperty, [Enforced]
        "The edm:OnDelete element MUST include the Action attribute with \
         one of the following values: Cascade, None, SetNull or SetDefault"
        => "4.0 P3 7.2.3";

    // 8 Entity Type

    fixed EtUniqueNames = "et_unique_names", EntityType, [Superseded(PropertyUnique)]
        "All properties MUST have a unique name within an entity type."
        => "4.0 P3 8 #1";

    contextual EtSameName = "et_same_name_s", EntityType, [Enforced]
        "Properties MUST NOT have the same name as the declaring entity \
         type (%s)"
        => "4.0 P3 8 #2 (%s)";

    fixed EtName = "et_name", EntityType, [Enforced]
        "The edm:EntityType element MUST include a Name attribute whose value \
         is a SimpleIdentifier"
        => "4.0 P3 8.1.1 #1";

    contextual EtNameUnique = "et_name_unique_s", EntityType, [Superseded(TypeQname)]
        "The EntityType name MUST be unique within its namespace (%s)"
        => "4.0 P3 8.1.1 #2 (%s)";

    contextual EtCycle = "et_cycle_s", EntityType, [Enforced]
        "An entity type MUST NOT introduce an inheritance cycle via the base \
         type attribute (%s)"
        => "4.0 P3 8.1.2 (%s)";

    contextual EtAbstractKey = "et_abstract_key_s", EntityType, [Enforced]
        "A non-abstract entity type MUST define a key or derive from a base \
         type with a defined key (%s)"
        => "4.0 P3 8.1.3 #1; 4.0 P3 8.2 #1 (%s)";

    contextual EtAbstractBase = "et_abstract_base_s", EntityType, [Enforced]
        "An abstract entity type MUST NOT inherit from a non-abstract entity \
         type (%s)"
        => "4.0 P3 8.1.3 #2 (%s)";

    contextual EtOpenBase = "et_open_base_s", EntityType, [Enforced]
        "An entity type derived from an open entity type MUST NOT provide a \
         value of false for the OpenType attribute (%s)"
        => "4.0 P3 8.1.4 #1 (%s)";

    /// A client obligation.
    fixed EtExtraProps = "et_extra_props", EntityType, [NotValidated]
        "Clients MUST always be prepared to deal with additional properties on \
         instances of any structured type"
        => "4.0 P3 8.1.4 #2; 4.0 P3 9.1.4 #2";

    contextual EtAbstractNoKey = "et_abstract_no_key_s", EntityType, [Enforced]
        "An entity type that is not abstract MUST either contain exactly one \
         edm:Key element or inherit its key from its base type [not both] (%s)"
        => "4.0 P3 8.2 #1 (%s)";

    contextual EtKeyRef = "et_key_ref_s", EntityType, [Enforced]
        "The edm:Key element MUST contain at least one edm:PropertyRef \
         element (%s)"
        => "4.0 P3 8.2 #2 (%s)";

    contextual KeyNullable = "key_nullable_s", EntityType, [Enforced]
        "The properties that compose the key MUST be non-nullable (%s)"
        => "4.0 P3 8.2 #3 (%s)";

    contextual KeyType = "key_type_s", EntityType, [Enforced]
        "The properties that compose the key MUST be typed with an enumeration \
         type or one of the allowed primitive types (%s)"
        => "4.0 P3 8.2 #4 (%s)";

    /// A constraint on entity instances, not on the model.
    fixed KeyLangunique = "key_langunique", EntityType, [NotValidated]
        "The values of the properties that make up a primary key MUST be \
         unique across all languages"
        => "4.0 P3 8.2 #5";

    fixed KeyLangIndependent = "key_langindepdent", EntityType, [NotValidated]
        "Entity ids MUST be language independent"
        => "4.0 P3 8.2 #6";

    contextual KeyName = "key_name_s", EntityType, [Enforced]
        "The edm:PropertyRef element MUST specify a value for the Name \
         attribute (%s)"
        => "4.0 P3 8.3.1 #1 (%s)";

    contextual KeyPath = "key_path_s", EntityType, [Enforced]
        "A key property MUST be a primitive property of the entity type itself \
         or a primitive property of a complex property (%s)"
        => "4.0 P3 8.3.1 #2 (%s)";

    contextual KeyAlias = "key_alias_s", EntityType, [Enforced]
        "If the property identified by the Name attribute is a member of a \
         complex type, the edm:PropertyRef element MUST specify the Alias \
         attribute [which must be a SimpleIdentifier] (%s)"
        => "4.0 P3 8.3.2 #1; 4.0 P3 8.3.2 #2 (%s)";

    fixed KeyAliasType = "key_alias_type", EntityType, [Superseded(KeyAlias)]
        "The value of the Alias attribute MUST be a SimpleIdentifier"
        => "4.0 P3 8.3.2 #2";

    contextual KeyAliasUnique = "key_alias_unique_s", EntityType, [Enforced]
        "The value of the Alias attribute MUST be unique within the set of \
         aliases, structural and navigation properties of the containing entity \
         type and any of its base types (%s)"
        => "4.0 P3 8.3.2 #3 (%s)";

    contextual KeyNoalias = "key_noalias_s", EntityType, [Enforced]
        "The Alias attribute MUST NOT be defined if the key property is not a \
         member of a complex type (%s)"
        => "4.0 P3 8.3.2 #4 (%s)";

    /// Applies to URL construction rather than the model.
    fixed KeyAliasPredicate = "key_alias_predicate", EntityType, [Pending]
        "For keys that are members of complex types, the alias MUST be used in \
         the key predicate of URLs instead of the value assigned to the Name \
         attribute"
        => "4.0 P3 8.3.2 #5";

    fixed KeyAliasQuery = "key_alias_query", EntityType, [Pending]
        "The key alias MUST NOT be used in the query part"
        => "4.0 P3 8.3.2 #6";

    // 9 Complex Type

    fixed CtUniqueNames = "ct_unique_names", ComplexType, [Superseded(PropertyUnique)]
        "All properties MUST have a unique name within a complex type"
        => "4.0 P3 9 #1";

    contextual CtSameName = "ct_same_name_s", ComplexType, [Enforced]
        "Properties MUST NOT have the same name as the declaring complex \
         type (%s)"
        => "4.0 P3 9 #2 (%s)";

    fixed CtName = "ct_name", ComplexType, [Enforced]
        "The edm:ComplexType element MUST include a Name attribute whose \
         value is a SimpleIdentifier"
        => "4.0 P3 9.1.1 #1";

    contextual CtNameUnique = "ct_name_unique_s", ComplexType, [Superseded(TypeQname)]
        "The ComplexType name MUST be unique within its namespace (%s)"
        => "4.0 P3 9.1.1 #2 (%s)";

    contextual CtCycle = "ct_cycle_s", ComplexType, [Enforced]
        "A complex type MUST NOT introduce an inheritance cycle via the base \
         type attribute (%s)"
        => "4.0 P3 9.1.2 (%s)";

    contextual CtOpenBase = "ct_open_base_s", ComplexType, [Enforced]
        "A complex type derived from an open complex type MUST NOT provide a \
         value of false for the OpenType attribute (%s)"
        => "4.0 P3 9.1.4 #1 (%s)";

    fixed CtExtraProps = "ct_extra_props", ComplexType, [NotValidated]
        "Clients MUST always be prepared to deal with additional properties on \
         instances of any structured type"
        => "4.0 P3 9.1.4 #2";

    // 10 Enumeration Type

    fixed EntName = "ent_name", EnumerationType, [Enforced]
        "The edm:EnumType element MUST include a Name attribute whose value \
         is a SimpleIdentifier"
        => "4.0 P3 10.1.1 #1";

    contextual EntNameUnique = "ent_name_unique_s", EnumerationType,
        [Superseded(TypeQname)]
        "The EnumType name MUST be unique within its namespace (%s)"
        => "4.0 P3 10.1.1 #2 (%s)";

    contextual EntType = "ent_type_s", EnumerationType, [Enforced]
        "The UnderlyingType of an enumeration MUST be one of Edm.Byte, \
         Edm.SByte, Edm.Int16, Edm.Int32, or Edm.Int64 (%s)"
        => "4.0 P3 10.1.2 (%s)";

    fixed EntMemberName = "ent_member_name", EnumerationType, [Enforced]
        "Each edm:Member element MUST include a Name attribute whose value is \
         a SimpleIdentifier"
        => "4.0 P3 10.2.1 #1";

    contextual EntMemberUnique = "ent_member_unique_s", EnumerationType, [Enforced]
        "The enumeration type MUST NOT declare two members with the same \
         name (%s)"
        => "4.0 P3 10.2.1 #2 (%s)";

    contextual EntAutoValue = "ent_auto_value_s", EnumerationType, [Enforced]
        "If the IsFlags attribute has a value of false, either all enumeration \
         members MUST specify an integer value for the Value attribute, or all \
         members MUST NOT specify a value for the Value attribute (%s)"
        => "4.0 P3 10.2.2 #1 (%s)";

    /// An obligation on client libraries.
    fixed EntAutoOrder = "ent_auto_order", EnumerationType, [NotValidated]
        "Client libraries MUST preserve elements in document order"
        => "4.0 P3 10.2.2 #2";

    contextual EntNonautoValue = "ent_nonauto_value_s", EnumerationType, [Enforced]
        "If the IsFlags attribute has a value of true, a non-negative integer \
         value MUST be specified for the enumeration member's Value \
         attribute (%s)"
        => "4.0 P3 10.2.2 #3 (%s)";

    contextual EntValidValue = "ent_valid_value_s", EnumerationType, [Enforced]
        "The value of an enumeration member MUST be a valid value for the \
         UnderlyingType of the enumeration type (%s)"
        => "4.0 P3 10.2.2 #4 (%s)";

    // 11 Type Definition

    fixed TdName = "td_name", TypeDefinition, [Enforced]
        "The edm:TypeDefinition element MUST include a Name attribute whose \
         value is a SimpleIdentifier"
        => "4.0 P3 11.1.1 #1";

    contextual TdNameUnique = "td_name_unique_s", TypeDefinition, [Superseded(TypeQname)]
        "The TypeDefinition name MUST be unique within its namespace (%s)"
        => "4.0 P3 11.1.1 #2 (%s)";

    contextual TdQname = "td_qname_s", TypeDefinition, [Enforced]
        "The edm:TypeDefinition element MUST provide the QualifiedName of a \
         primitive type as the value of the UnderlyingType attribute (%s)"
        => "4.0 P3 11.1.2 #1 (%s)";

    contextual TdRedef = "td_redef_s", TypeDefinition, [Enforced]
        "The underlying type of a type definition MUST NOT be another type \
         definition (%s)"
        => "4.0 P3 11.1.2 #2 (%s)";

    contextual TdFacet = "td_facet_s", TypeDefinition, [Enforced]
        "Facets specified in the type definition MUST NOT be re-specified when \
         the type definition is used (%s)"
        => "4.0 P3 11.1.3 #1 (%s)";

    contextual TdAnnotation = "td_annotation_s", TypeDefinition, [Enforced]
        "The use of a type definition MUST NOT specify an annotation specified \
         in the type definition (%s)"
        => "4.0 P3 11.1.3 #2 (%s)";
}
